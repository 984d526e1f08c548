use serde::{Deserialize, Serialize};

/// Metadata echoed back to the caller after a local-store upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub message: String,
    pub file_name: String,
    pub original_name: String,
    pub size: u64,
    pub path: String,
}

/// Liveness payload for GET /api/upload
#[derive(Debug, Serialize, Deserialize)]
pub struct Liveness {
    pub message: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = UploadReceipt {
            message: "Upload complete".to_string(),
            file_name: "0191-abc.pdf".to_string(),
            original_name: "report.pdf".to_string(),
            size: 1024,
            path: "/tmp/pdf-uploads/0191-abc.pdf".to_string(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["fileName"], "0191-abc.pdf");
        assert_eq!(json["originalName"], "report.pdf");
        assert_eq!(json["size"], 1024);
        assert_eq!(json["path"], "/tmp/pdf-uploads/0191-abc.pdf");
    }

    #[test]
    fn test_receipt_deserialize_round() {
        let json = r#"{"message":"Upload complete","fileName":"a.pdf","originalName":"b.pdf","size":7,"path":"/tmp/a.pdf"}"#;
        let receipt: UploadReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.file_name, "a.pdf");
        assert_eq!(receipt.original_name, "b.pdf");
        assert_eq!(receipt.size, 7);
    }

    #[test]
    fn test_liveness_shape() {
        let liveness = Liveness {
            message: "PDF Upload API is working".to_string(),
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&liveness).unwrap();
        assert_eq!(json["message"], "PDF Upload API is working");
        assert!(json["timestamp"].is_string());
    }
}
