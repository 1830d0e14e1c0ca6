//! Storefront Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use storefront_app::{
    auth::{AuthService, PgAuthService, models::UserUuid},
    database,
    domain::products::{
        PgProductsService, ProductsService,
        models::{NewProduct, ProductUuid},
    },
};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Token(TokenCommand),
    Product(ProductCommand),
}

#[derive(Debug, Args)]
struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    Create(CreateTokenArgs),
}

#[derive(Debug, Args)]
struct CreateTokenArgs {
    /// User the token authenticates as
    #[arg(long)]
    user_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
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

    /// Unit price in minor currency units
    #[arg(long)]
    price: u64,

    /// Units available for sale
    #[arg(long)]
    stock: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
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
        Commands::Token(TokenCommand {
            command: TokenSubcommand::Create(args),
        }) => create_token(args).await,
        Commands::Product(ProductCommand {
            command: ProductSubcommand::Create(args),
        }) => create_product(args).await,
    }
}

async fn create_token(args: CreateTokenArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_api_token(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("user_uuid: {}", issued.user_uuid);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}

async fn create_product(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(database::Db::new(pool));
    let product_uuid = args
        .product_uuid
        .map_or_else(ProductUuid::new, ProductUuid::from_uuid);

    let product = service
        .create_product(NewProduct {
            uuid: product_uuid,
            name: args.name,
            price: args.price,
            stock: args.stock,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("name: {}", product.name);
    println!("price: {}", product.price);
    println!("stock: {}", product.stock);

    Ok(())
}
