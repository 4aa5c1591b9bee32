use cart::context::CartContext;
use cart::domain::Product;
use cart::store::CartStore;
use shared::config::Config;
use std::path::Path;
use std::sync::Arc;
use storage::SledStore;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    info!("Starting cart demo");

    // Load environment variables
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    let db_path = Path::new(&config.data_dir).join("cart");

    let backend = Arc::new(SledStore::new(db_path)?);
    let store = Arc::new(CartStore::new(backend));

    store.load().await?;
    info!(items = store.items().await.len(), "cart hydrated");

    // The application root owns the store; consumers get a context handle.
    let context = CartContext::provide(store);
    let cart = context.cart()?;

    cart.add_to_cart(Product::new(
        "p1",
        "Plain T-shirt",
        "https://example.com/p1.png",
        19.9,
    ))
    .await?;
    cart.add_to_cart(Product::new(
        "p2",
        "Coffee mug",
        "https://example.com/p2.png",
        7.5,
    ))
    .await?;

    cart.increment("p1").await?;
    if let Err(e) = cart.decrement("p2").await {
        warn!("failed to persist decrement: {e}");
    }

    for item in cart.items().await {
        info!(
            id = %item.id,
            title = %item.title,
            price = item.price,
            quantity = item.quantity,
            "cart line"
        );
    }

    Ok(())
}
