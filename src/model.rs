//! Data structures exchanged between the report client and server.
//!
//! The types in this module describe the JSON payload accepted by the `/generate` endpoint and the
//! acknowledgement sent back once a report has been written.  Field names follow the wire format
//! exactly, so deserializing a request doubles as schema validation: a missing mandatory field or a
//! non-string value is rejected before any layout work happens.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Status value carried by a successful [`ReportResponse`].
pub const SUCCESS_STATUS: &str = "success";

/// One maintenance event, rendered as a single table row.
///
/// Every field except `notes` is mandatory.  Values are kept verbatim; no trimming or
/// normalisation is applied so the report shows exactly what the caller sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    #[serde(rename = "recordID")]
    record_id: String,
    car: String,
    license: String,
    service_date: String,
    mileage: String,
    service_type: String,
    provider: String,
    #[serde(default)]
    notes: String,
}

impl MaintenanceRecord {
    /// Creates a record with the given identifier and all other fields empty.
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            ..Self::default()
        }
    }

    /// Returns the caller supplied record identifier.
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Returns the vehicle description.
    pub fn car(&self) -> &str {
        &self.car
    }

    /// Returns the licence plate.
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Returns the service date as sent by the caller.
    pub fn service_date(&self) -> &str {
        &self.service_date
    }

    /// Returns the odometer reading as sent by the caller.
    pub fn mileage(&self) -> &str {
        &self.mileage
    }

    /// Returns the kind of service performed.
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Returns the service provider.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the free-form notes, empty when none were given.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the eight cell values in column order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.record_id.as_str(),
            self.car.as_str(),
            self.license.as_str(),
            self.service_date.as_str(),
            self.mileage.as_str(),
            self.service_type.as_str(),
            self.provider.as_str(),
            self.notes.as_str(),
        ]
    }

    /// Sets the vehicle description and returns the updated record.
    pub fn with_car(mut self, car: impl Into<String>) -> Self {
        self.car = car.into();
        self
    }

    /// Sets the licence plate and returns the updated record.
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Sets the service date and returns the updated record.
    pub fn with_service_date(mut self, service_date: impl Into<String>) -> Self {
        self.service_date = service_date.into();
        self
    }

    /// Sets the mileage and returns the updated record.
    pub fn with_mileage(mut self, mileage: impl Into<String>) -> Self {
        self.mileage = mileage.into();
        self
    }

    /// Sets the service type and returns the updated record.
    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    /// Sets the provider and returns the updated record.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Sets the notes and returns the updated record.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Body of a `/generate` call: where to write the report and which rows to put in it.
///
/// Record order is preserved and determines row order in the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    folder: String,
    filename: String,
    records: Vec<MaintenanceRecord>,
}

impl ReportRequest {
    /// Creates a request for the given target location and records.
    pub fn new(
        folder: impl Into<String>,
        filename: impl Into<String>,
        records: impl Into<Vec<MaintenanceRecord>>,
    ) -> Self {
        Self {
            folder: folder.into(),
            filename: filename.into(),
            records: records.into(),
        }
    }

    /// Returns the target directory.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Returns the target file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the records in request order.
    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    /// Returns `folder` joined with `filename`.
    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(&self.folder).join(&self.filename)
    }
}

/// Acknowledgement returned after a report was saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    status: String,
    path: String,
}

impl ReportResponse {
    /// Creates a success acknowledgement for the given saved path.
    pub fn success(path: impl Into<String>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_owned(),
            path: path.into(),
        }
    }

    /// Returns the status indicator.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the saved file path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Indicates whether the status field signals success.
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::{MaintenanceRecord, ReportRequest, ReportResponse};
    use serde_json::json;
    use std::path::Path;

    fn record_json() -> serde_json::Value {
        json!({
            "recordID": "R-1",
            "car": "Civic",
            "license": "ABC123",
            "serviceDate": "2024-03-01",
            "mileage": "42000",
            "serviceType": "Oil change",
            "provider": "QuickLube"
        })
    }

    #[test]
    fn notes_default_to_empty() {
        let record: MaintenanceRecord = serde_json::from_value(record_json()).unwrap();

        assert_eq!(record.record_id(), "R-1");
        assert_eq!(record.service_type(), "Oil change");
        assert_eq!(record.notes(), "");
    }

    #[test]
    fn missing_mandatory_field_is_rejected() {
        for field in [
            "recordID",
            "car",
            "license",
            "serviceDate",
            "mileage",
            "serviceType",
            "provider",
        ] {
            let mut value = record_json();
            value.as_object_mut().unwrap().remove(field);
            let err = serde_json::from_value::<MaintenanceRecord>(value).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "error for {field} should name it: {err}"
            );
        }
    }

    #[test]
    fn numeric_mileage_is_not_coerced() {
        let mut value = record_json();
        value["mileage"] = json!(42000);

        assert!(serde_json::from_value::<MaintenanceRecord>(value).is_err());
    }

    #[test]
    fn null_notes_are_rejected() {
        let mut value = record_json();
        value["notes"] = json!(null);

        assert!(serde_json::from_value::<MaintenanceRecord>(value).is_err());
    }

    #[test]
    fn request_keeps_record_order_and_ignores_unknown_keys() {
        let mut second = record_json();
        second["recordID"] = json!("R-2");
        let request: ReportRequest = serde_json::from_value(json!({
            "folder": "/tmp/reports",
            "filename": "out.pdf",
            "records": [record_json(), second],
            "extra": true
        }))
        .unwrap();

        let ids: Vec<_> = request.records().iter().map(|r| r.record_id()).collect();
        assert_eq!(ids, ["R-1", "R-2"]);
        assert_eq!(request.target_path(), Path::new("/tmp/reports/out.pdf"));
    }

    #[test]
    fn serializes_wire_field_names() {
        let record = MaintenanceRecord::new("7").with_service_date("2024-01-01");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["recordID"], "7");
        assert_eq!(value["serviceDate"], "2024-01-01");
        assert_eq!(value["notes"], "");
    }

    #[test]
    fn response_success_flag() {
        let response: ReportResponse =
            serde_json::from_value(json!({"status": "success", "path": "/a/b.pdf"})).unwrap();
        assert!(response.is_success());
        assert_eq!(response, ReportResponse::success("/a/b.pdf"));
        assert_eq!(response.status(), "success");
        assert_eq!(response.path(), "/a/b.pdf");

        let failed: ReportResponse =
            serde_json::from_value(json!({"status": "failed", "path": ""})).unwrap();
        assert!(!failed.is_success());
    }
}
