//! Storefront Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use storefront_app::{
    database::{self, Db},
    domain::{
        products::{PgProductsService, ProductsService, data::NewProduct},
        users::{PgUsersService, UsersService, data::NewUser},
    },
};

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(ProductCommand),
    User(UserCommand),
}

#[derive(Debug, Args)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit price in minor units (pence/cents)
    #[arg(long)]
    price: u64,

    /// Units in stock
    #[arg(long)]
    quantity: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(CreateUserArgs),
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    /// Raw password; stored as a salted digest
    #[arg(long)]
    password: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Product(ProductCommand {
            command: ProductSubcommand::Create(args),
        }) => create_product(args).await,
        Commands::User(UserCommand {
            command: UserSubcommand::Create(args),
        }) => create_user(args).await,
    }
}

async fn create_product(args: CreateProductArgs) -> Result<(), String> {
    let service = PgProductsService::new(connect(&args.database_url).await?);

    let product = service
        .create_product(NewProduct {
            name: args.name,
            price: args.price,
            quantity: args.quantity,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", product.price);
    println!("quantity: {}", product.quantity);

    Ok(())
}

async fn create_user(args: CreateUserArgs) -> Result<(), String> {
    let service = PgUsersService::new(connect(&args.database_url).await?);

    let user = service
        .register_user(NewUser {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_id: {}", user.id);
    println!("email: {}", user.email);

    Ok(())
}

async fn connect(database_url: &str) -> Result<Db, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(Db::new(pool))
}
