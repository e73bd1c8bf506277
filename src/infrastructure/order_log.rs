use crate::domain::order::Order;
use crate::domain::ports::OrderLog;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Default file the shop appends finalized orders to.
pub const DEFAULT_LOG_PATH: &str = "cloth_orders.txt";

/// Renders the single log line for an order.
///
/// `Order ID: <id> | Items: <name>, <name> | Final Total: Rs <total>`
pub fn format_order_line(order: &Order) -> String {
    let names: Vec<&str> = order.items().iter().map(|item| item.name.as_str()).collect();
    format!(
        "Order ID: {} | Items: {} | Final Total: Rs {}",
        order.id(),
        names.join(", "),
        order.total()
    )
}

/// Appends one line per order to a text file, creating it if missing.
#[derive(Debug, Clone)]
pub struct FileOrderLog {
    path: PathBuf,
}

impl FileOrderLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileOrderLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

#[async_trait]
impl OrderLog for FileOrderLog {
    async fn append(&self, order: &Order) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut line = format_order_line(order);
        line.push('\n');
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
