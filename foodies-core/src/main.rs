use anyhow::bail;
use foodies_core::{CatalogScreenState, Config, Session, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    print_banner();
    tracing::info!(api = %config.api_base_url, "Foodies client core starting...");

    // 2. 建立会话并拉取目录
    let session = Session::connect(config)?;
    let catalog = session.open_catalog();

    // 3. 输出目录摘要
    match catalog.settled().await {
        CatalogScreenState::Success(view) => {
            for category in &view.categories {
                let count = view
                    .products
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .count();
                tracing::info!(category = %category.name, products = count, "Category");
            }
            tracing::info!(
                categories = view.categories.len(),
                products = view.products.len(),
                tags = view.tags.len(),
                "Catalog ready"
            );
        }
        CatalogScreenState::Error => {
            bail!("Failed to load catalog from {}", session.config().api_base_url)
        }
        CatalogScreenState::Loading => bail!("Catalog load was cancelled"),
    }

    session.shutdown();
    Ok(())
}
