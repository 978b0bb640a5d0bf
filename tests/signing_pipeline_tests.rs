//! Integration tests for the signing pipeline
//!
//! derive → build → sign → assemble, checked against reference vectors computed
//! independently for the Hardhat test key on the Sepolia testnet chain.

use chrono::DateTime;
use paradex_signer::artifacts::{auth_headers, onboarding_request, order_request};
use paradex_signer::crypto::starknet::{felt_from_hex, StarkNetSignature};
use paradex_signer::exchanges::signed_order_request;
use paradex_signer::{
    build, derive, normalize_at, sign, verify, AuthFields, ChainConfig, EthereumIdentity,
    MessageFields, NormalizedOrder, OrderSide, OrderType, RawOrder, VenueAccount,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use starknet_types_core::felt::Felt;

const ETH_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const ACCOUNT_HASH: &str = "0x41cb0280ebadaa75f996d8d92c6f265f6d040bb3ba442e5f86a554f1765244e";
const PROXY_HASH: &str = "0x3530cc4759d78042f1b543bf797f5f3d647cde0388c33734cf91b7f7b9314a9";

const EXPECTED_PRIVATE_KEY: &str = "0x2482c217d9d4f7cab57ca16f93d64edcfeff9aa1874a1dc57fa1c28dafcd0aa";
const EXPECTED_PUBLIC_KEY: &str = "0x8857491dd4065910836e3b02bd51c93f1c3c1e2289accb0bc02123555569c1";
const EXPECTED_ADDRESS: &str = "0x37ff1c9d89a50b3dd3a4f90e020ea80251b09ba28049efbe4f7d3fec2995c4a";

const AUTH_TIMESTAMP: i64 = 1_700_000_000;
const ORDER_TIMESTAMP_MS: i64 = 1_700_000_000_123;

fn chain_with_id(chain_id: &str) -> ChainConfig {
    ChainConfig::new(
        chain_id,
        11155111,
        felt_from_hex(ACCOUNT_HASH).unwrap(),
        felt_from_hex(PROXY_HASH).unwrap(),
        "https://api.testnet.paradex.trade/v1",
    )
    .unwrap()
}

fn testnet() -> ChainConfig {
    chain_with_id("PRIVATE_SN_POTC_SEPOLIA")
}

fn identity() -> EthereumIdentity {
    EthereumIdentity::from_hex(ETH_PRIVATE_KEY).unwrap()
}

fn account() -> VenueAccount {
    derive(&identity(), &testnet()).unwrap()
}

fn fixture_order() -> NormalizedOrder {
    NormalizedOrder {
        market: "BTC-USD-PERP".into(),
        side: OrderSide::Buy,
        order_type: OrderType::Limit,
        size: dec!(0.100),
        price: Some(dec!(65000.50)),
        client_id: "order-1700000000".into(),
        signature_timestamp: ORDER_TIMESTAMP_MS,
        instruction: "GTC".into(),
    }
}

// === Derivation ===

#[test]
fn test_derivation_golden_vector() {
    let account = account();
    assert_eq!(format!("{:#x}", account.private_key), EXPECTED_PRIVATE_KEY);
    assert_eq!(account.public_key_hex(), EXPECTED_PUBLIC_KEY);
    assert_eq!(account.address_hex(), EXPECTED_ADDRESS);
}

#[test]
fn test_derivation_is_deterministic() {
    let a = derive(&identity(), &testnet()).unwrap();
    let b = derive(&identity(), &testnet()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_derivation_rejects_invalid_key_material() {
    let zero_key = format!("0x{}", "00".repeat(32));
    for bad in ["", "0x", "not-hex", "0x1234", zero_key.as_str()] {
        let err = EthereumIdentity::from_hex(bad).unwrap_err();
        assert_eq!(err.code(), "INVALID_KEY_MATERIAL", "input {bad:?}");
    }
}

// === Golden signatures ===

#[test]
fn test_auth_golden_vector() {
    let account = account();
    let fields = AuthFields::login(AUTH_TIMESTAMP);
    let message = build(MessageFields::Auth(fields.clone()), &testnet()).unwrap();

    let hash = message.hash(&account.address).unwrap();
    assert_eq!(
        format!("{hash:#x}"),
        "0x54e33f0899f4e1df36b5a9805baad15bc012bf9c159e3b7fcd2d57e4abda650"
    );

    let signature = sign(&message, &account).unwrap();
    let headers = auth_headers(&account, &fields, &signature);
    assert_eq!(
        headers.signature,
        r#"["1700015531171106554706836840574422644618759172862641219877388751424213508419","3315647530609783273884757394521511658570501281429650599056187253952178158211"]"#
    );
    assert_eq!(headers.account, EXPECTED_ADDRESS);
    assert_eq!(headers.timestamp, "1700000000");
    assert_eq!(headers.expiration, "1700086400");
}

#[test]
fn test_onboarding_golden_vector() {
    let account = account();
    let message = build(MessageFields::Onboarding, &testnet()).unwrap();
    assert_eq!(
        format!("{:#x}", message.hash(&account.address).unwrap()),
        "0x6c975a8f9d37ee1632ca3b53610d4fd5b9c65121b5c3c9c226050b5a3dab32a"
    );

    let signature = sign(&message, &account).unwrap();
    let request = onboarding_request(&identity(), &account, &signature);
    assert_eq!(
        request.signature,
        r#"["1207364183912744849924911083485796864406020986672792697362829146565411517339","1275160622661831729622329897340354498844008076747286145210697156983869765487"]"#
    );
    assert_eq!(request.ethereum_account, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    assert_eq!(request.body.public_key, EXPECTED_PUBLIC_KEY);
}

#[test]
fn test_order_golden_vector() {
    let account = account();
    let message = build(MessageFields::Order(fixture_order()), &testnet()).unwrap();
    assert_eq!(
        format!("{:#x}", message.hash(&account.address).unwrap()),
        "0x7ef9fa339a1c020b8593207898fbd1ca774d9f002db4227d379e4ebfb1b3d53"
    );

    let signature = sign(&message, &account).unwrap();
    assert_eq!(
        signature.to_header_value(),
        r#"["1710494497415722389672038043588714216391536494385471113892907773208081991923","819341451465731708904227590299724774828218413239303877479706921475966963730"]"#
    );
}

// === Properties ===

#[test]
fn test_signing_is_deterministic() {
    let account = account();
    let message = build(MessageFields::Auth(AuthFields::login(AUTH_TIMESTAMP)), &testnet()).unwrap();
    assert_eq!(sign(&message, &account).unwrap(), sign(&message, &account).unwrap());
}

#[test]
fn test_domain_separation_across_networks() {
    let account = account();
    let fields = AuthFields::login(AUTH_TIMESTAMP);
    let testnet_message = build(MessageFields::Auth(fields.clone()), &testnet()).unwrap();
    let mainnet_message =
        build(MessageFields::Auth(fields), &chain_with_id("PRIVATE_SN_PARACLEAR_MAINNET")).unwrap();

    assert_ne!(
        testnet_message.hash(&account.address).unwrap(),
        mainnet_message.hash(&account.address).unwrap()
    );

    let signature = sign(&testnet_message, &account).unwrap();
    assert!(!verify(&signature, &mainnet_message, &account.address, &account.public_key).unwrap());
}

#[test]
fn test_signature_binds_every_order_field() {
    let account = account();
    let chain = testnet();
    let original = build(MessageFields::Order(fixture_order()), &chain).unwrap();
    let signature = sign(&original, &account).unwrap();
    assert!(verify(&signature, &original, &account.address, &account.public_key).unwrap());

    let mutations: [(&str, fn(&mut NormalizedOrder)); 6] = [
        ("market", |o| o.market = "ETH-USD-PERP".into()),
        ("side", |o| o.side = OrderSide::Sell),
        ("type", |o| o.order_type = OrderType::Market),
        ("size", |o| o.size = dec!(0.101)),
        ("price", |o| o.price = Some(dec!(65000.51))),
        ("timestamp", |o| o.signature_timestamp += 1),
    ];

    for (field, mutate) in mutations {
        let mut order = fixture_order();
        mutate(&mut order);
        let mutated = build(MessageFields::Order(order), &chain).unwrap();
        assert!(
            !verify(&signature, &mutated, &account.address, &account.public_key).unwrap(),
            "mutating {field} must invalidate the signature"
        );
    }
}

#[test]
fn test_client_id_is_not_signed() {
    let account = account();
    let chain = testnet();
    let original = build(MessageFields::Order(fixture_order()), &chain).unwrap();

    let mut renamed = fixture_order();
    renamed.client_id = "another-id".into();
    let renamed = build(MessageFields::Order(renamed), &chain).unwrap();

    assert_eq!(
        original.hash(&account.address).unwrap(),
        renamed.hash(&account.address).unwrap()
    );
}

#[test]
fn test_order_round_trip() {
    let account = account();
    let raw = RawOrder::new("BTC-USD-PERP", "buy", "limit")
        .with_size("0.1009")
        .with_price("65000.509")
        .with_client_id("rt-1");
    let now = DateTime::from_timestamp_millis(ORDER_TIMESTAMP_MS).unwrap();

    let normalized = normalize_at(&raw, now).unwrap();
    let (order, request) = signed_order_request(&account, &testnet(), &raw, now).unwrap();
    assert_eq!(order, normalized);

    assert_eq!(request.market, order.market);
    assert_eq!(request.side, "BUY");
    assert_eq!(request.order_type, "LIMIT");
    assert_eq!(request.size, "0.100");
    assert_eq!(request.price.as_deref(), Some("65000.50"));
    assert_eq!(request.client_id, "rt-1");
    assert_eq!(request.instruction, "GTC");
    assert_eq!(request.signature_timestamp, ORDER_TIMESTAMP_MS);

    let signature = StarkNetSignature::from_header_value(&request.signature).unwrap();
    let message = build(MessageFields::Order(order.clone()), &testnet()).unwrap();
    assert!(account.verify_message(&signature, &message).unwrap());

    assert_eq!(order_request(&order, &signature), request);
}

#[test]
fn test_degenerate_key_is_signing_error() {
    let message = build(MessageFields::Onboarding, &testnet()).unwrap();
    let mut account = account();
    account.private_key = Felt::ZERO;
    assert_eq!(sign(&message, &account).unwrap_err().code(), "SIGNING_ERROR");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_signature_verifies(key in 1u64..u64::MAX, timestamp in 1_600_000_000i64..2_000_000_000) {
        let chain = testnet();
        let account = paradex_signer::crypto::starknet::account_from_private_key(
            Felt::from(key),
            &chain,
        )
        .unwrap();
        let message = build(MessageFields::Auth(AuthFields::login(timestamp)), &chain).unwrap();
        let signature = sign(&message, &account).unwrap();
        prop_assert!(verify(&signature, &message, &account.address, &account.public_key).unwrap());
    }
}
