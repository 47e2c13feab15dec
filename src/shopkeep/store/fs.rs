use super::DataStore;
use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::ledger::OrderLedger;
use crate::model::{Order, Product};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub const PRODUCTS_FILE: &str = "products.txt";
pub const ORDERS_FILE: &str = "orders.txt";
pub const SALES_FILE: &str = "sales.txt";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShopError::Io)?;
        }
        Ok(())
    }

    /// Full-file rewrite, via temp file and rename so a crash mid-write
    /// never leaves a torn snapshot.
    fn write_snapshot(&self, file_name: &str, contents: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp = self.root.join(format!("{}.tmp", file_name));
        fs::write(&tmp, contents).map_err(ShopError::Io)?;
        fs::rename(&tmp, self.root.join(file_name)).map_err(ShopError::Io)?;
        Ok(())
    }

    /// Parse every non-blank line of a snapshot file. One malformed line
    /// aborts the whole load; the caller reports it and starts empty.
    fn read_records<T>(
        &self,
        file_name: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(ShopError::Io)?;
        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse(line).ok_or_else(|| ShopError::Snapshot {
                file: file_name.to_string(),
                line: idx + 1,
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl DataStore for FileStore {
    fn load_catalog(&self) -> Result<Catalog> {
        let products = self.read_records(PRODUCTS_FILE, Product::from_record)?;
        Ok(Catalog::from_products(products))
    }

    fn load_ledger(&self) -> Result<OrderLedger> {
        let orders = self.read_records(ORDERS_FILE, Order::from_record)?;
        Ok(OrderLedger::from_orders(orders))
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        let mut contents = String::new();
        for product in catalog.list() {
            contents.push_str(&product.to_record());
            contents.push('\n');
        }
        self.write_snapshot(PRODUCTS_FILE, &contents)
    }

    fn save_ledger(&mut self, ledger: &OrderLedger) -> Result<()> {
        let mut contents = String::new();
        for order in ledger.list() {
            contents.push_str(&order.to_record());
            contents.push('\n');
        }
        self.write_snapshot(ORDERS_FILE, &contents)
    }

    fn append_sale(&mut self, order: &Order) -> Result<()> {
        self.ensure_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(SALES_FILE))
            .map_err(ShopError::Io)?;
        writeln!(file, "{}", order.sale_record()).map_err(ShopError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use chrono::NaiveDate;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn missing_files_load_as_empty_collections() {
        let (_dir, store) = store();
        assert!(store.load_catalog().unwrap().is_empty());
        assert!(store.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn catalog_round_trips_through_the_snapshot() {
        let (_dir, mut store) = store();
        let mut catalog = Catalog::new();
        catalog.register("Desk Lamp", 10000, 5).unwrap();
        catalog.register("책상", 45000, 2).unwrap();
        store.save_catalog(&catalog).unwrap();

        let reloaded = store.load_catalog().unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn delimiter_names_cannot_poison_the_snapshot() {
        let (_dir, mut store) = store();
        let mut catalog = Catalog::new();
        catalog.register("Desk Lamp", 10000, 5).unwrap();
        // The input boundary refuses the delimiter, so the saved snapshot
        // stays parseable.
        assert!(catalog.register("Desk, Lamp", 10000, 5).is_err());
        store.save_catalog(&catalog).unwrap();

        let reloaded = store.load_catalog().unwrap();
        assert_eq!(reloaded, catalog);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn ledger_round_trips_through_the_snapshot() {
        let (_dir, mut store) = store();
        let mut ledger = OrderLedger::new();
        ledger.append(Order::new(
            ProductId::generate(),
            "Desk Lamp".into(),
            10000,
            3,
            "Kim".into(),
            "12 Mapo-gu Seoul".into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ));
        store.save_ledger(&ledger).unwrap();

        let reloaded = store.load_ledger().unwrap();
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn malformed_line_aborts_the_load() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(PRODUCTS_FILE),
            "PROD-aaaa1111,Desk Lamp,10000,5\ngarbage line\n",
        )
        .unwrap();

        match store.load_catalog() {
            Err(ShopError::Snapshot { file, line }) => {
                assert_eq!(file, PRODUCTS_FILE);
                assert_eq!(line, 2);
            }
            other => panic!("expected snapshot error, got {:?}", other),
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(PRODUCTS_FILE),
            "PROD-aaaa1111,Desk Lamp,10000,5\n\n",
        )
        .unwrap();
        assert_eq!(store.load_catalog().unwrap().len(), 1);
    }

    #[test]
    fn sales_log_accumulates_appends() {
        let (dir, mut store) = store();
        let order = Order::new(
            ProductId::generate(),
            "Desk Lamp".into(),
            10000,
            3,
            "Kim".into(),
            "Seoul".into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        store.append_sale(&order).unwrap();
        store.append_sale(&order).unwrap();

        let log = fs::read_to_string(dir.path().join(SALES_FILE)).unwrap();
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines, ["Desk Lamp,3,30000원,2024-01-10"; 2]);
    }

    #[test]
    fn snapshot_writes_leave_no_temp_file_behind() {
        let (dir, mut store) = store();
        store.save_catalog(&Catalog::new()).unwrap();
        assert!(dir.path().join(PRODUCTS_FILE).exists());
        assert!(!dir.path().join("products.txt.tmp").exists());
    }
}
