use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use encapsulated_learning::{
    Book, Borrower, Car, DatabaseConfig, Librarian, LibraryError, Registry, SharedItem, Speed,
    Transmission, Vehicle, convert_speed_to_mph, share,
};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the encapsulation demos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every state change (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Which demonstration to run
    #[command(subcommand)]
    demo: Demo,
}

/// Available demonstrations
#[derive(Subcommand, Debug)]
enum Demo {
    /// Borrow and return books at the library
    Library {
        /// How many items Alice may hold at once
        #[arg(long, default_value_t = 2)]
        max_items: usize,

        /// Print Alice's final items as JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Drive a few cars with different transmissions
    Vehicles,
    /// Read database settings and pretend to connect
    Config {
        /// Read this file instead of looking for `.env`
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.demo {
        Demo::Library { max_items, json } => library_demo(max_items, json),
        Demo::Vehicles => vehicles_demo(),
        Demo::Config { env_file } => config_demo(env_file),
    }
}

/// Install the fmt subscriber, writing to stderr so it never mixes with demo output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the outcome of a library operation
fn report(result: Result<(), LibraryError>, success: &str) {
    match result {
        Ok(()) => println!("{}", success.green()),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

/// Title of a shared item, for messages
fn title_of(item: &SharedItem) -> String {
    item.borrow().title().to_string()
}

/// Alice borrows until her limit, returns one book and gets some help
fn library_demo(max_items: usize, json: bool) {
    println!("{}", "Library System Demonstration".green().bold());
    println!("=====================================\n");

    let books = [
        share(Book::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Fiction")),
        share(Book::new("Clean Code", "Robert C. Martin", 2008, "Programming")),
        share(Book::new("1984", "George Orwell", 1949, "Dystopian")),
    ];
    let mut user = Borrower::with_max_items("Alice", max_items);
    let mut registry = Registry::new();
    let librarian = Librarian::new("Margaret", &mut registry);

    println!("Formatted title: {}", Librarian::format_item_title("to kill a mockingbird"));
    println!("Total librarians: {}\n", Librarian::total_librarians(&registry));

    for book in &books {
        let success = format!("'{}' has been checked out.", title_of(book));
        report(user.borrow_item(book), &success);
    }
    println!("\n{}", user.list_borrowed_items());

    if let Some(first) = books.first() {
        let success = format!("'{}' has been returned.", title_of(first));
        report(user.return_item(first), &success);
    }

    if json {
        match serde_json::to_string_pretty(&user.report()) {
            Ok(rendered) => println!("\n{rendered}"),
            Err(e) => println!("{}", format!("Failed to render report: {e}").red()),
        }
    } else {
        println!("\n{}", user.list_borrowed_items());
    }

    println!("\n{}", librarian.assist_user(&user).cyan());
}

/// Drive, refuel and count three cars
fn vehicles_demo() {
    println!("{}", "Vehicle Demonstration".green().bold());
    println!("=====================================\n");

    let mut registry = Registry::new();
    let mazda = Car::new("Mazda", "MX-5", 60, Transmission::Manual, &mut registry);
    let toyota = Car::new("Toyota", "Camry", 80, Transmission::Automatic, &mut registry);
    let ford_speed = -50;
    if let Err(e) = Speed::try_from_kph(ford_speed) {
        println!("{}", format!("{e} Setting to 0.").yellow());
    }
    let ford = Car::new("Ford", "Focus", ford_speed, Transmission::Standard, &mut registry);

    let vehicles: [&dyn Vehicle; 3] = [&mazda, &toyota, &ford];
    for vehicle in vehicles {
        println!("{}", vehicle.drive());
        println!("{}", vehicle.refuel());
    }

    println!("\nTotal cars created: {}", Car::total_cars(&registry));
    println!("Speed in mph: {}", convert_speed_to_mph(f64::from(toyota.speed().kph())));
}

/// Load the four database values and report a pretend connection
fn config_demo(env_file: Option<PathBuf>) {
    println!("{}", "Configuration Demonstration".green().bold());
    println!("=====================================\n");

    let loaded = match env_file {
        Some(path) => DatabaseConfig::from_env_file(&path),
        None => DatabaseConfig::from_env(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e.to_string().red());
            return;
        }
    };

    println!("Connecting to database...");
    println!("{}", config.summary());
    match config.connect() {
        Ok(_) => println!("{}", "Connection successful (pretend)".green().bold()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}
