use alloc::string::String;

use crate::limits::DescriptionMode;
use crate::profile::{
    ACCOUNT_DESCRIPTION, ACCOUNT_GUI, ACCOUNT_KEY, ADDITIONAL_DATA, BRCODE_GUI, BRCODE_VERSION,
    CATEGORY_CODE_UNSPECIFIED, COUNTRY_BR, COUNTRY_CODE, CURRENCY_BRL, DEFAULT_TRANSACTION_ID,
    FORMAT_VERSION, MERCHANT_ACCOUNT, MERCHANT_CATEGORY_CODE, MERCHANT_CITY, MERCHANT_NAME,
    PAYLOAD_FORMAT_INDICATOR, PAYMENT_SYSTEM, PAYMENT_SYSTEM_GUI, PAYMENT_SYSTEM_VERSION, PIX_GUI,
    REFERENCE_LABEL, TRANSACTION_AMOUNT, TRANSACTION_CURRENCY,
};
use crate::request::EncodingRequest;
use crate::value::{Tag, TlvMap};

/// Build the BR Code template tree for `request`.
///
/// No validation is performed. Empty name or city fields are omitted, as is an empty description.
#[must_use]
pub fn build(request: &EncodingRequest) -> TlvMap {
    build_with(request, DescriptionMode::Omit)
}

/// Build the BR Code template tree with explicit empty-description handling.
#[must_use]
pub fn build_with(request: &EncodingRequest, description: DescriptionMode) -> TlvMap {
    let mut root = TlvMap::new();

    root.insert(PAYLOAD_FORMAT_INDICATOR, FORMAT_VERSION);
    root.insert(MERCHANT_ACCOUNT, merchant_account(request, description));
    root.insert(MERCHANT_CATEGORY_CODE, CATEGORY_CODE_UNSPECIFIED);
    root.insert(TRANSACTION_CURRENCY, CURRENCY_BRL);
    root.insert(TRANSACTION_AMOUNT, request.amount_or_zero());
    root.insert(COUNTRY_CODE, COUNTRY_BR);
    insert_non_empty(&mut root, MERCHANT_NAME, &request.name);
    insert_non_empty(&mut root, MERCHANT_CITY, &request.city);
    root.insert(ADDITIONAL_DATA, additional_data(request));

    root
}

fn merchant_account(request: &EncodingRequest, description: DescriptionMode) -> TlvMap {
    let mut account = TlvMap::new();
    account.insert(ACCOUNT_GUI, PIX_GUI);
    account.insert(ACCOUNT_KEY, request.key.as_str());
    match description {
        DescriptionMode::Omit => {
            insert_non_empty(&mut account, ACCOUNT_DESCRIPTION, &request.description);
        }
        DescriptionMode::EmitEmpty => {
            account.insert(ACCOUNT_DESCRIPTION, request.description.as_str());
        }
    }
    account
}

fn additional_data(request: &EncodingRequest) -> TlvMap {
    let reference = if request.transaction_id.is_empty() {
        DEFAULT_TRANSACTION_ID
    } else {
        request.transaction_id.as_str()
    };

    let mut payment_system = TlvMap::new();
    payment_system.insert(PAYMENT_SYSTEM_GUI, BRCODE_GUI);
    payment_system.insert(PAYMENT_SYSTEM_VERSION, BRCODE_VERSION);

    let mut data = TlvMap::new();
    data.insert(REFERENCE_LABEL, reference);
    data.insert(PAYMENT_SYSTEM, payment_system);
    data
}

fn insert_non_empty(map: &mut TlvMap, tag: Tag, value: &str) {
    if !value.is_empty() {
        map.insert(tag, String::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TlvValue;
    use crate::Amount;

    fn account(root: &TlvMap) -> &TlvMap {
        root.get(MERCHANT_ACCOUNT)
            .and_then(TlvValue::as_branch)
            .unwrap()
    }

    #[test]
    fn key_only_request_defaults_optional_fields() {
        let root = build(&EncodingRequest {
            key: "jonnasfonini@gmail.com".into(),
            ..EncodingRequest::default()
        });

        assert_eq!(
            root.get(TRANSACTION_AMOUNT),
            Some(&TlvValue::Decimal(Amount::ZERO))
        );
        assert!(!root.contains(MERCHANT_NAME));
        assert!(!root.contains(MERCHANT_CITY));
        assert!(!account(&root).contains(ACCOUNT_DESCRIPTION));

        let data = root
            .get(ADDITIONAL_DATA)
            .and_then(TlvValue::as_branch)
            .unwrap();
        assert_eq!(
            data.get(REFERENCE_LABEL).and_then(TlvValue::as_text),
            Some("***")
        );
    }

    #[test]
    fn legacy_mode_keeps_empty_description() {
        let req = EncodingRequest::new("k", "n", "c");
        let root = build_with(&req, DescriptionMode::EmitEmpty);
        assert_eq!(
            account(&root)
                .get(ACCOUNT_DESCRIPTION)
                .and_then(TlvValue::as_text),
            Some("")
        );
    }

    #[test]
    fn transaction_id_replaces_placeholder() {
        let req = EncodingRequest::new("k", "n", "c").with_transaction_id("99999");
        let root = build(&req);
        let data = root
            .get(ADDITIONAL_DATA)
            .and_then(TlvValue::as_branch)
            .unwrap();
        assert_eq!(
            data.get(REFERENCE_LABEL).and_then(TlvValue::as_text),
            Some("99999")
        );
    }
}
