//! Live checks against an L2 node.
//!
//! Run with `L2_RPC_URL=... cargo test -p migrator --test precheck -- --ignored`.

use crate::setup::{l2_rpc_url, load_test_config, pending};
use alloy_primitives::Bytes;
use alloy_provider::Provider;
use alloy_rpc_types_eth::BlockNumberOrTag;
use migrator::{create_provider, run_precheck};

#[path = "setup.rs"]
mod setup;

#[tokio::test]
#[ignore = "requires an L2 RPC endpoint"]
async fn test_unknown_withdrawal_is_unrelayed() {
    let config = load_test_config();
    let provider = create_provider(&l2_rpc_url()).unwrap();

    // Never sent through the legacy message passer
    let withdrawals = vec![pending(u64::MAX, Bytes::from(vec![0x01, 0x02, 0x03]))];

    let unrelayed = run_precheck(&config, &provider, &withdrawals, BlockNumberOrTag::Latest)
        .await
        .unwrap();

    assert_eq!(unrelayed.len(), 1);
    assert_eq!(unrelayed[0].index, 0);
}

#[tokio::test]
#[ignore = "requires an L2 RPC endpoint"]
async fn test_pinned_block() {
    let config = load_test_config();
    let provider = create_provider(&l2_rpc_url()).unwrap();
    let block = provider.get_block_number().await.unwrap().saturating_sub(10);

    let unrelayed = run_precheck(&config, &provider, &[], BlockNumberOrTag::Number(block))
        .await
        .unwrap();

    assert!(unrelayed.is_empty());
}
