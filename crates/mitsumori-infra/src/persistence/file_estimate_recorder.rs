//! File-based implementation of EstimateRecorder
//!
//! Stores accepted estimate requests in a JSON file on disk. Customer ids
//! are sequential, mirroring a generated database key.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::Utc;

use mitsumori_domain::model::{Customer, CustomerPackage, CustomerRecord, EstimateResult};
use mitsumori_domain::repository::EstimateRecorder;
use mitsumori_types::{Result, StoreError};

/// File-based estimate request recorder (JSON)
#[derive(Debug)]
pub struct FileEstimateRecorder {
    store_path: PathBuf,
    records: RefCell<HashMap<u64, CustomerRecord>>,
}

impl FileEstimateRecorder {
    /// Create or load a recorder store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("estimates.json");

        let records = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .map_err(|e| StoreError::Corrupted(e.to_string()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            store_path,
            records: RefCell::new(records),
        })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.records.borrow())?;
        Ok(())
    }

    fn next_customer_id(&self) -> u64 {
        self.records.borrow().keys().max().copied().unwrap_or(0) + 1
    }

    /// All recorded requests, newest first
    pub fn find_all(&self) -> Vec<CustomerRecord> {
        let mut records: Vec<CustomerRecord> = self.records.borrow().values().cloned().collect();
        records.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        records
    }

    /// Look up a record by customer id
    pub fn find_by_id(&self, customer_id: u64) -> Option<CustomerRecord> {
        self.records.borrow().get(&customer_id).cloned()
    }

    /// Number of recorded requests
    pub fn count(&self) -> usize {
        self.records.borrow().len()
    }
}

impl EstimateRecorder for FileEstimateRecorder {
    fn insert_customer(&self, customer: &Customer) -> Result<u64> {
        let customer_id = self.next_customer_id();
        let record = CustomerRecord {
            customer_id,
            customer: customer.clone(),
            option_services: Vec::new(),
            packages: Vec::new(),
            result: None,
            requested_at: Utc::now(),
        };
        self.records.borrow_mut().insert(customer_id, record);
        self.persist()?;
        Ok(customer_id)
    }

    fn insert_customer_option(&self, customer_id: u64, service_id: &str) -> Result<usize> {
        {
            let mut records = self.records.borrow_mut();
            let record = records
                .get_mut(&customer_id)
                .ok_or(StoreError::CustomerNotFound(customer_id))?;
            record.option_services.push(service_id.to_string());
        }
        self.persist()?;
        Ok(1)
    }

    fn batch_insert_customer_packages(
        &self,
        packages: &[CustomerPackage],
    ) -> Result<Vec<usize>> {
        {
            let mut records = self.records.borrow_mut();
            for row in packages {
                let record = records
                    .get_mut(&row.customer_id)
                    .ok_or(StoreError::CustomerNotFound(row.customer_id))?;
                record.packages.push((row.package_id.clone(), row.quantity));
            }
        }
        self.persist()?;
        Ok(vec![1; packages.len()])
    }

    fn attach_result(&self, customer_id: u64, result: &EstimateResult) -> Result<()> {
        {
            let mut records = self.records.borrow_mut();
            let record = records
                .get_mut(&customer_id)
                .ok_or(StoreError::CustomerNotFound(customer_id))?;
            record.result = Some(result.clone());
        }
        self.persist()?;
        Ok(())
    }

    fn delete_customer(&self, customer_id: u64) -> Result<()> {
        let removed = self.records.borrow_mut().remove(&customer_id).is_some();
        if removed {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mitsumori_types::Error;

    fn customer(name: &str) -> Customer {
        Customer {
            customer_name: name.to_string(),
            tel: "090-0000-0000".to_string(),
            email: "test@example.com".to_string(),
            old_prefecture_id: "13".to_string(),
            new_prefecture_id: "14".to_string(),
            old_address: "新宿区1-1".to_string(),
            new_address: "横浜市2-2".to_string(),
        }
    }

    #[test]
    fn test_insert_customer_assigns_increasing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();

        let first = recorder.insert_customer(&customer("佐藤")).unwrap();
        let second = recorder.insert_customer(&customer("鈴木")).unwrap();
        assert!(second > first);
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let customer_id = {
            let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
            let id = recorder.insert_customer(&customer("佐藤")).unwrap();
            recorder.insert_customer_option(id, "1").unwrap();
            id
        };

        let reopened = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
        let record = reopened.find_by_id(customer_id).unwrap();
        assert_eq!(record.customer.customer_name, "佐藤");
        assert_eq!(record.option_services, vec!["1".to_string()]);
    }

    #[test]
    fn test_batch_insert_packages() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
        let id = recorder.insert_customer(&customer("佐藤")).unwrap();

        let rows = vec![
            CustomerPackage {
                customer_id: id,
                package_id: "BOX".to_string(),
                quantity: 10,
            },
            CustomerPackage {
                customer_id: id,
                package_id: "BED".to_string(),
                quantity: 1,
            },
        ];
        let counts = recorder.batch_insert_customer_packages(&rows).unwrap();
        assert_eq!(counts, vec![1, 1]);

        let record = recorder.find_by_id(id).unwrap();
        assert_eq!(record.packages.len(), 2);
    }

    #[test]
    fn test_unknown_customer_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();

        let err = recorder.insert_customer_option(42, "1").unwrap_err();
        assert!(matches!(
            err,
            Error::Store(StoreError::CustomerNotFound(42))
        ));
    }

    #[test]
    fn test_delete_customer_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let (kept, dropped) = {
            let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
            let kept = recorder.insert_customer(&customer("佐藤")).unwrap();
            let dropped = recorder.insert_customer(&customer("鈴木")).unwrap();
            recorder.delete_customer(dropped).unwrap();
            (kept, dropped)
        };

        let reopened = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
        assert!(reopened.find_by_id(kept).is_some());
        assert!(reopened.find_by_id(dropped).is_none());
        assert_eq!(reopened.count(), 1);
    }

    #[test]
    fn test_delete_unknown_customer_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
        recorder.delete_customer(42).unwrap();
    }

    #[test]
    fn test_corrupted_store_is_reported_not_reset() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("estimates.json"), "{not json").unwrap();

        let err = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Corrupted(_))));
    }

    #[test]
    fn test_attach_result() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = FileEstimateRecorder::open(dir.path().to_path_buf()).unwrap();
        let id = recorder.insert_customer(&customer("佐藤")).unwrap();

        let result = EstimateResult {
            distance_km: 50.0,
            total_boxes: 6,
            truck_price_yen: 15000,
            option_price_yen: 0,
            total_price_yen: 15000,
        };
        recorder.attach_result(id, &result).unwrap();

        let record = recorder.find_by_id(id).unwrap();
        assert_eq!(record.result.unwrap().total_price_yen, 15000);
    }
}
