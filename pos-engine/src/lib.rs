//! POS Engine - order totals and sales aggregation for a restaurant terminal
//!
//! # Overview
//!
//! - **Orders** (`orders`): cart, checkout, money math, kitchen workflow
//! - **Reports** (`reports`): dashboard, accountant view, CSV export
//! - **Store** (`store`): key-value persistence (memory / redb)
//! - **Session** (`session`): signed-in user and accessible views
//!
//! # Layout
//!
//! ```text
//! pos-engine/src/
//! ├── core/          # configuration
//! ├── orders/        # money, numbering, lifecycle, cart, order book
//! ├── reports/       # aggregation, views, CSV export
//! ├── store/         # KvStore trait and backends
//! ├── utils/         # logger, business time
//! └── session.rs     # current user
//! ```

pub mod core;
pub mod orders;
pub mod reports;
pub mod session;
pub mod store;
pub mod utils;

pub use core::Config;
pub use orders::{Cart, Checkout, Lifecycle, OrderBook, OrderError, OrderResult, Register};
pub use reports::{AccountantView, ManagerDashboard, TransactionFilter};
pub use session::{Session, SessionError};
pub use store::{KvStore, KvStoreExt, MemoryStore, RedbStore, SharedStore, StoreError};

pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/   engine
"#
    );
}

/// Load `.env`, read [`Config`], make sure the working directories exist
/// and start logging
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    std::fs::create_dir_all(&config.work_dir)?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}
