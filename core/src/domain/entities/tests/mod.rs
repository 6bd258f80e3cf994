mod session_tests;

use crate::domain::entities::account::Account;

/// Active staff account in an active company, not yet linked to Entra
pub(crate) fn sample_account() -> Account {
    Account {
        user_id: 42,
        tenant_id: "T1".to_string(),
        object_id: None,
        username: "jane.doe@contoso.com".to_string(),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        is_active: true,
        company_id: 7,
        company_name: "Contoso Care".to_string(),
        company_is_active: true,
        staff_id: Some(1001),
        staff_email: Some("jane.doe@contoso.com".to_string()),
    }
}
