use anyhow::Context;
use pos_engine::reports::{export_file_name, transactions_csv};
use pos_engine::utils::time::today_start_millis;
use pos_engine::{
    AccountantView, ManagerDashboard, OrderBook, RedbStore, Register, Session, SharedStore,
    TransactionFilter, print_banner, setup_environment,
};
use shared::util::now_millis;
use std::sync::Arc;

/// Usage: `pos-engine [search] [payment|all] [status|all]`
///
/// Prints today's manager dashboard and the accountant summary for the
/// stored orders, then writes the filtered transactions to a CSV file in
/// `WORK_DIR`.
fn main() -> anyhow::Result<()> {
    // 1. .env, config, logging
    let config = setup_environment().context("failed to prepare environment")?;

    print_banner();
    tracing::info!(work_dir = %config.work_dir.display(), "POS engine starting...");

    // 2. Store
    let store_path = config.store_path();
    let store: SharedStore = Arc::new(
        RedbStore::open(&store_path)
            .with_context(|| format!("failed to open store at {}", store_path.display()))?,
    );
    let book = OrderBook::new(store.clone());
    book.seed_defaults()?;

    let session = Session::new(store);
    if let Some(user) = session.current()? {
        let landing = user.role.landing_view();
        tracing::info!(user = %user.name, view = landing.label(), "Resuming session");
    }

    let register = Register::open(book.clone(), &config)?;
    println!(
        "Next order #{} (tax rate {})",
        register.next_order_number(),
        register.cart().tax_rate()
    );

    // 3. Snapshot
    let orders = book.orders()?;
    let staff = book.staff()?;
    let now = now_millis();

    let dashboard = ManagerDashboard::build(&orders, &staff, today_start_millis(now, config.timezone));
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    let accountant = AccountantView::build(&orders);
    println!("{}", serde_json::to_string_pretty(&accountant.summary)?);

    // 4. Export
    let mut args = std::env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let payment = args.next().unwrap_or_else(|| "all".into());
    let status = args.next().unwrap_or_else(|| "all".into());
    let filter = TransactionFilter::parse(&search, &payment, &status)?;

    let transactions = accountant.transactions(&filter);
    let path = config.work_dir.join(export_file_name(now));
    std::fs::write(&path, transactions_csv(transactions.iter().copied(), config.timezone))
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        rows = transactions.len(),
        path = %path.display(),
        "Transactions exported"
    );
    Ok(())
}
