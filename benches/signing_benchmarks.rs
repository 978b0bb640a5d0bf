//! Signing Benchmarks
//!
//! Benchmarks for account derivation, typed-message hashing and order signing

use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paradex_signer::crypto::starknet::{felt_from_hex, pedersen_hash};
use paradex_signer::exchanges::signed_order_request;
use paradex_signer::{
    build, derive, normalize_at, sign, AuthFields, ChainConfig, EthereumIdentity, MessageFields,
    RawOrder,
};
use rust_decimal_macros::dec;
use starknet_types_core::felt::Felt;

const ETH_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn chain() -> ChainConfig {
    ChainConfig::new(
        "PRIVATE_SN_POTC_SEPOLIA",
        11155111,
        felt_from_hex("0x41cb0280ebadaa75f996d8d92c6f265f6d040bb3ba442e5f86a554f1765244e").unwrap(),
        felt_from_hex("0x3530cc4759d78042f1b543bf797f5f3d647cde0388c33734cf91b7f7b9314a9").unwrap(),
        "https://api.testnet.paradex.trade/v1",
    )
    .unwrap()
}

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    let chain = chain();
    let identity = EthereumIdentity::from_hex(ETH_PRIVATE_KEY).unwrap();

    group.bench_function("ethereum_identity_from_hex", |b| {
        b.iter(|| black_box(EthereumIdentity::from_hex(ETH_PRIVATE_KEY)))
    });

    group.bench_function("derive_account", |b| {
        b.iter(|| black_box(derive(&identity, &chain)))
    });

    group.bench_function("pedersen_hash", |b| {
        let x = Felt::from(1u64);
        let y = Felt::from(2u64);
        b.iter(|| black_box(pedersen_hash(&x, &y)))
    });

    group.finish();
}

fn bench_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing");
    let chain = chain();
    let account = derive(&EthereumIdentity::from_hex(ETH_PRIVATE_KEY).unwrap(), &chain).unwrap();

    let auth = build(MessageFields::Auth(AuthFields::login(1_700_000_000)), &chain).unwrap();
    let onboarding = build(MessageFields::Onboarding, &chain).unwrap();

    for (name, message) in [("auth", &auth), ("onboarding", &onboarding)] {
        group.bench_with_input(BenchmarkId::new("message_hash", name), message, |b, m| {
            b.iter(|| black_box(m.hash(&account.address)))
        });
        group.bench_with_input(BenchmarkId::new("sign", name), message, |b, m| {
            b.iter(|| black_box(sign(m, &account)))
        });
    }

    group.finish();
}

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("orders");
    let chain = chain();
    let account = derive(&EthereumIdentity::from_hex(ETH_PRIVATE_KEY).unwrap(), &chain).unwrap();
    let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();

    let raw = RawOrder::new("BTC-USD-PERP", "buy", "limit")
        .with_size(dec!(0.1234))
        .with_price(dec!(65000.567));

    group.bench_function("normalize", |b| b.iter(|| black_box(normalize_at(&raw, now))));

    group.bench_function("normalize_sign_assemble", |b| {
        b.iter(|| black_box(signed_order_request(&account, &chain, &raw, now)))
    });

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_signing, bench_orders);

criterion_main!(benches);
