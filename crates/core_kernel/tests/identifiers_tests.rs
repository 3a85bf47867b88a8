//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display
//! formatting for both identifier types.

use core_kernel::{CaseId, ClaimId};
use uuid::Uuid;

mod case_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = CaseId::new();
        let id2 = CaseId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CaseId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(CaseId::prefix(), "CASE");
    }

    #[test]
    fn test_display_format() {
        let id = CaseId::new();
        let display = id.to_string();
        assert!(display.starts_with("CASE-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = CaseId::new();
        let string = original.to_string();
        let parsed: CaseId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: CaseId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_json_serialization() {
        let id = CaseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ClaimId::new();
        let id2 = ClaimId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
    }

    #[test]
    fn test_roundtrip() {
        let original = ClaimId::new();
        let string = original.to_string();
        let parsed: ClaimId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod cross_type_tests {
    use super::*;

    #[test]
    fn test_different_id_types_are_distinct() {
        // Same UUID should create different identifier instances
        // that are type-safe (can't mix CaseId with ClaimId)
        let uuid = Uuid::new_v4();
        let case_id = CaseId::from_uuid(uuid);
        let claim_id = ClaimId::from_uuid(uuid);

        // They contain the same UUID but are different types
        assert_eq!(*case_id.as_uuid(), *claim_id.as_uuid());
    }

    #[test]
    fn test_id_prefixes_are_unique() {
        assert_ne!(CaseId::prefix(), ClaimId::prefix());
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_nil_uuid() {
        let nil_uuid = Uuid::nil();
        let id = CaseId::from_uuid(nil_uuid);
        assert!(id.as_uuid().is_nil());
    }
}
