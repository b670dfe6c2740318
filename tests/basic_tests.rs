use std::str::FromStr;

use assert_matches::assert_matches;
use fixed_ratio_sdk::{
    FIXED_RATIO_PROGRAM_ID, FixedRatioError, FixedRatioSDK, PoolAddresses, PoolBumps, PoolFlags,
    PoolOperation, PoolRecord, RatioType, SdkConfig, constants::*, get_ratio_type, pda, quote,
    validate_one_to_many_pattern,
};
use rust_decimal::Decimal;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};

fn mint_a() -> Pubkey {
    Pubkey::new_from_array([1; 32])
}

fn mint_b() -> Pubkey {
    Pubkey::new_from_array([2; 32])
}

fn key(s: &str) -> Pubkey {
    Pubkey::from_str(s).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A pool whose stored accounts agree with their derivations
fn derived_pool(ratio_a: u64, ratio_b: u64) -> PoolRecord {
    let addresses = PoolAddresses::derive(
        &FIXED_RATIO_PROGRAM_ID,
        POOL_STATE_SEED,
        mint_a(),
        mint_b(),
        ratio_a,
        ratio_b,
    )
    .unwrap();

    PoolRecord {
        address: addresses.pool_state.address,
        owner: Pubkey::new_unique(),
        token_a_mint: addresses.pair.token_a_mint,
        token_b_mint: addresses.pair.token_b_mint,
        token_a_vault: addresses.token_a_vault.address,
        token_b_vault: addresses.token_b_vault.address,
        lp_token_a_mint: addresses.lp_token_a_mint.address,
        lp_token_b_mint: addresses.lp_token_b_mint.address,
        ratio_a_numerator: addresses.pair.ratio_a_numerator,
        ratio_b_denominator: addresses.pair.ratio_b_denominator,
        total_token_a_liquidity: 10_000_000_000,
        total_token_b_liquidity: 1_600_000_000,
        bumps: PoolBumps {
            pool_authority: addresses.pool_state.bump,
            token_a_vault: addresses.token_a_vault.bump,
            token_b_vault: addresses.token_b_vault.bump,
            lp_token_a_mint: addresses.lp_token_a_mint.bump,
            lp_token_b_mint: addresses.lp_token_b_mint.bump,
        },
        flags: PoolFlags::from_bits(FLAG_ONE_TO_MANY_RATIO),
        contract_liquidity_fee: DEPOSIT_WITHDRAWAL_FEE,
        swap_contract_fee: SWAP_CONTRACT_FEE,
        collected_liquidity_fees: 2 * DEPOSIT_WITHDRAWAL_FEE,
        collected_swap_contract_fees: 3 * SWAP_CONTRACT_FEE,
        total_sol_fees_collected: 2 * DEPOSIT_WITHDRAWAL_FEE + 3 * SWAP_CONTRACT_FEE,
        ..Default::default()
    }
}

#[test]
fn test_fixed_ratio_program_id() {
    assert_eq!(
        FIXED_RATIO_PROGRAM_ID.to_string(),
        "quXSYkeZ8ByTCtYY1J1uxQmE36UZ3LmNGgE3CYMFixD"
    );
}

#[test]
fn test_golden_pool_addresses() {
    let addresses = PoolAddresses::derive(
        &FIXED_RATIO_PROGRAM_ID,
        POOL_STATE_SEED,
        mint_a(),
        mint_b(),
        1_000_000_000,
        1,
    )
    .unwrap();

    assert_eq!(
        mint_a(),
        key("4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi")
    );
    assert_eq!(
        mint_b(),
        key("8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR")
    );

    let expected = [
        (addresses.pool_state, "9YbCEvzbX1S1UiS58QoDzkQE7dCHVTYncuQLcVvxyGhD", 255),
        (addresses.token_a_vault, "9t3XPEZzv2jeKmTa7EL9ZaqZT4wBi7rdqP1bHdP4Drgw", 255),
        (addresses.token_b_vault, "7syg65STWooXYZQDx4SndFApudgTLo92MyWsWXWPrP6P", 254),
        (addresses.lp_token_a_mint, "9zyeNJazQ2fP2jm9m2Nga6NqPGJsQQNjTC2fYgRMY3U6", 255),
        (addresses.lp_token_b_mint, "F8xfungVdEHz1pn17yvgx1VpQwEtJg63bn7fdALjcfH9", 253),
        (addresses.main_treasury, "4LwioejiK9ML57kqm6K7b4FHtPAGz88to3b9j1cPiEeN", 252),
        (addresses.system_state, "Dkjm34MNnR7z8mZ1hohMu2D9WxePyjnJ58gahG8CthqL", 255),
    ];
    for (derived, address, bump) in expected {
        assert_eq!(derived.address, key(address));
        assert_eq!(derived.bump, bump);
    }
}

#[test]
fn test_pool_addresses_ignore_label_order() {
    let forward = PoolAddresses::derive(
        &FIXED_RATIO_PROGRAM_ID,
        POOL_STATE_SEED,
        mint_a(),
        mint_b(),
        1_000_000_000,
        1,
    )
    .unwrap();
    let reversed = PoolAddresses::derive(
        &FIXED_RATIO_PROGRAM_ID,
        POOL_STATE_SEED,
        mint_b(),
        mint_a(),
        1,
        1_000_000_000,
    )
    .unwrap();

    assert!(!forward.pair.swapped);
    assert!(reversed.pair.swapped);
    assert_eq!(forward.pool_state, reversed.pool_state);
    assert_eq!(forward.token_b_vault, reversed.token_b_vault);
    assert_eq!(reversed.pair.ratio_a_numerator, 1_000_000_000);
}

#[test]
fn test_pool_state_seed_is_configurable() {
    let pair = pda::normalize_pair(mint_a(), mint_b(), 1_000_000_000, 1);
    let v1 = pda::pool_state_address(&FIXED_RATIO_PROGRAM_ID, b"pool_state", &pair).unwrap();
    let v2 = pda::pool_state_address(&FIXED_RATIO_PROGRAM_ID, b"pool_state_v2", &pair).unwrap();
    assert_ne!(v1.address, v2.address);

    let sdk = FixedRatioSDK::new(SdkConfig::default().with_pool_state_seed(b"pool_state_v2")).unwrap();
    let addresses = sdk.pool_addresses(mint_a(), mint_b(), 1_000_000_000, 1).unwrap();
    assert_eq!(addresses.pool_state, v2);
}

#[test]
fn test_initialize_pool_account_pattern() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let user = Pubkey::new_unique();
    let sol = sdk.precision(mint_a(), Some(9)).unwrap();
    let usdt = sdk.precision(mint_b(), Some(6)).unwrap();

    let plan = sdk
        .initialize_pool_ix(user, &sol, Decimal::ONE, &usdt, Decimal::from(160))
        .unwrap();
    let reversed = sdk
        .initialize_pool_ix(user, &usdt, Decimal::from(160), &sol, Decimal::ONE)
        .unwrap();
    assert_eq!(plan, reversed);

    assert_eq!(plan.accounts.len(), 12);
    let pattern: Vec<(bool, bool)> = plan
        .accounts
        .iter()
        .map(|meta| (meta.is_signer, meta.is_writable))
        .collect();
    assert_eq!(
        pattern,
        vec![
            (true, true),
            (false, false),
            (false, false),
            (false, true),
            (false, false),
            (false, true),
            (false, false),
            (false, false),
            (false, true),
            (false, true),
            (false, true),
            (false, true),
        ]
    );
    assert_eq!(plan.accounts[1].pubkey, system_program::ID);
    assert_eq!(plan.accounts[4].pubkey, spl_token::ID);
    assert_eq!(plan.accounts[6].pubkey, mint_a());
    assert_eq!(plan.accounts[7].pubkey, mint_b());

    let mut data = vec![INITIALIZE_POOL_DISCRIMINATOR];
    data.extend_from_slice(&1_000_000_000u64.to_le_bytes());
    data.extend_from_slice(&160_000_000u64.to_le_bytes());
    assert_eq!(plan.data, data);

    let instruction: Instruction = plan.into();
    assert_eq!(instruction.program_id, FIXED_RATIO_PROGRAM_ID);
}

#[test]
fn test_initialize_pool_rejects_bad_input() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let user = Pubkey::new_unique();
    let sol = sdk.precision(mint_a(), Some(9)).unwrap();

    assert_matches!(
        sdk.initialize_pool_ix(user, &sol, Decimal::ONE, &sol, Decimal::ONE),
        Err(FixedRatioError::EncodingValidation(_))
    );

    let usdt = sdk.precision(mint_b(), Some(6)).unwrap();
    assert_matches!(
        sdk.initialize_pool_ix(user, &sol, Decimal::ZERO, &usdt, Decimal::ONE),
        Err(FixedRatioError::EncodingValidation(_))
    );
    assert_matches!(
        sdk.initialize_pool_ix(user, &sol, dec("-1"), &usdt, Decimal::ONE),
        Err(FixedRatioError::Domain(_))
    );
}

#[test]
fn test_decode_round_trip_through_sdk() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let pool = derived_pool(1_000_000_000, 160_000_000);

    let data = pool.encode().unwrap();
    assert_eq!(data.len(), POOL_STATE_LEN);

    let decoded = sdk.decode_pool(pool.address, &data).unwrap();
    assert_eq!(decoded, pool);
    assert!(sdk.pool_addresses_for(&decoded).unwrap().matches_record(&decoded));
    assert_eq!(decoded.operations_since_consolidation(), (2, 3));
    assert_eq!(
        decoded.pending_sol_fees(),
        2 * DEPOSIT_WITHDRAWAL_FEE + 3 * SWAP_CONTRACT_FEE
    );
}

#[test]
fn test_decode_reports_truncation_and_uninitialized() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let pool = derived_pool(1_000_000_000, 160_000_000);
    let data = pool.encode().unwrap();

    assert_matches!(
        sdk.decode_pool(pool.address, &data[..100]),
        Err(FixedRatioError::TruncatedData {
            field: "token_a_vault",
            needed: 32,
            remaining: 4,
        })
    );
    assert_matches!(
        sdk.decode_pool(pool.address, &[0u8; POOL_STATE_LEN]),
        Err(FixedRatioError::UninitializedAccount)
    );
    assert_matches!(
        sdk.decode_pool(pool.address, &[]),
        Err(FixedRatioError::UninitializedAccount)
    );
}

#[test]
fn test_quote_example() {
    assert_eq!(
        quote(dec("0.5"), 9, 6, 160_000_000, 1_000_000_000).unwrap(),
        Decimal::from(80)
    );

    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let pool = derived_pool(1_000_000_000, 160_000_000);
    let sol = sdk.precision(pool.token_a_mint, Some(9)).unwrap();
    let usdt = sdk.precision(pool.token_b_mint, Some(6)).unwrap();

    assert_eq!(
        sdk.quote(&pool, &sol, &usdt, dec("0.5")).unwrap(),
        Decimal::from(80)
    );
    assert_eq!(
        sdk.quote(&pool, &usdt, &sol, Decimal::from(80)).unwrap(),
        dec("0.5")
    );
    // 0.000001 USDT buys 6.25 base units of SOL, floored
    assert_eq!(
        sdk.quote(&pool, &usdt, &sol, dec("0.000001")).unwrap(),
        dec("0.000000006")
    );
    assert_matches!(
        sdk.quote(&pool, &sol, &sol, Decimal::ONE),
        Err(FixedRatioError::Domain(_))
    );
}

#[test]
fn test_one_to_many_and_ratio_types() {
    assert!(validate_one_to_many_pattern(Decimal::ONE, Decimal::from(160)));
    assert!(!validate_one_to_many_pattern(dec("1.5"), Decimal::from(240)));
    assert!(!validate_one_to_many_pattern(Decimal::ONE, dec("160.5")));

    assert_eq!(
        get_ratio_type(1_000_000_000, 160_000_000, 9, 6).unwrap(),
        RatioType::SimpleRatio
    );
    assert_eq!(
        get_ratio_type(1_000_000_000, 160_500_000, 9, 6).unwrap(),
        RatioType::DecimalRatio
    );
    assert_eq!(
        get_ratio_type(1_500_000_000, 240_000_000, 9, 6).unwrap(),
        RatioType::DecimalRatio
    );
    assert_eq!(
        get_ratio_type(2_500_000_000, 3_700_000, 9, 6).unwrap(),
        RatioType::EngineeringRatio
    );
}

#[test]
fn test_liquidity_and_swap_flows() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let pool = derived_pool(1_000_000_000, 160_000_000);
    let user = Pubkey::new_unique();
    let sol = sdk.precision(pool.token_a_mint, Some(9)).unwrap();
    let usdt = sdk.precision(pool.token_b_mint, Some(6)).unwrap();

    let deposit = sdk.deposit_ix(&pool, user, &usdt, dec("12.5")).unwrap();
    assert_eq!(deposit.discriminator(), DEPOSIT_DISCRIMINATOR);
    assert_eq!(&deposit.data[33..], &12_500_000u64.to_le_bytes());
    assert_eq!(
        deposit.accounts[8].pubkey,
        pda::user_token_account(&user, &pool.lp_token_b_mint)
    );

    let withdraw = sdk.withdraw_ix(&pool, user, &sol, dec("0.25")).unwrap();
    assert_eq!(withdraw.discriminator(), WITHDRAW_DISCRIMINATOR);
    assert_eq!(&withdraw.data[33..], &250_000_000u64.to_le_bytes());
    assert_eq!(
        withdraw.accounts[7].pubkey,
        pda::user_token_account(&user, &pool.lp_token_a_mint)
    );

    let swap = sdk.swap_ix(&pool, user, &sol, dec("0.5")).unwrap();
    assert_eq!(swap.accounts.len(), 11);
    assert_eq!(swap.accounts[9].pubkey, pool.token_a_mint);
    assert_eq!(swap.accounts[10].pubkey, pool.token_b_mint);
    assert_eq!(&swap.data[1..33], pool.token_a_mint.as_ref());
    assert_eq!(swap.signers(), vec![user]);
}

#[test]
fn test_admin_and_view_flows() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let pool = derived_pool(1_000_000_000, 160_000_000);

    let init = sdk.initialize_program_ix(Pubkey::new_unique()).unwrap();
    assert_eq!(init.accounts.len(), 6);
    assert_eq!(init.data, vec![INITIALIZE_PROGRAM_DISCRIMINATOR]);

    let pause = sdk
        .pause_pool_ix(&pool, pool.owner, PAUSE_FLAG_SWAPS)
        .unwrap();
    assert_eq!(pause.data, vec![PAUSE_POOL_DISCRIMINATOR, PAUSE_FLAG_SWAPS]);

    let unpause = sdk
        .unpause_pool_ix(&pool, pool.owner, PAUSE_FLAG_ALL)
        .unwrap();
    assert_eq!(unpause.data, vec![UNPAUSE_POOL_DISCRIMINATOR, PAUSE_FLAG_ALL]);

    let designated = Pubkey::new_unique();
    let owner_only = sdk
        .set_swap_owner_only_ix(&pool, Pubkey::new_unique(), true, designated)
        .unwrap();
    assert_eq!(owner_only.accounts.len(), 4);
    assert_eq!(&owner_only.data[2..], designated.as_ref());

    let consolidate = sdk.consolidate_pool_fees_ix(&[pool.address]).unwrap();
    assert_eq!(
        consolidate.data,
        vec![CONSOLIDATE_POOL_FEES_DISCRIMINATOR, 1]
    );
    let too_many: Vec<Pubkey> = (0..=MAX_POOLS_PER_CONSOLIDATION)
        .map(|_| Pubkey::new_unique())
        .collect();
    assert_matches!(
        sdk.consolidate_pool_fees_ix(&too_many),
        Err(FixedRatioError::EncodingValidation(_))
    );

    let view = sdk.pool_view_ix(&pool, PoolOperation::GetFeeInfo).unwrap();
    assert_eq!(view.data, vec![GET_FEE_INFO_DISCRIMINATOR]);
    assert!(view.signers().is_empty());
}

#[test]
fn test_paused_pool_still_encodes() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let mut pool = derived_pool(1_000_000_000, 160_000_000);
    pool.flags = PoolFlags::from_bits(FLAG_SWAPS_PAUSED | FLAG_LIQUIDITY_PAUSED);
    let sol = sdk.precision(pool.token_a_mint, Some(9)).unwrap();

    assert!(pool.is_paused());
    assert!(sdk.swap_ix(&pool, Pubkey::new_unique(), &sol, Decimal::ONE).is_ok());
    assert!(sdk.deposit_ix(&pool, Pubkey::new_unique(), &sol, Decimal::ONE).is_ok());
}

#[test]
fn test_summary_through_sdk() {
    let sdk = FixedRatioSDK::new(SdkConfig::default()).unwrap();
    let pool = derived_pool(1_000_000_000, 160_000_000);
    let sol = sdk.precision(pool.token_a_mint, Some(9)).unwrap();
    let usdt = sdk.precision(pool.token_b_mint, None).unwrap();
    assert!(usdt.is_fallback());

    let summary = sdk.summarize(&pool, &sol, &usdt).unwrap();
    assert_eq!(summary.ratio_a_display, "1");
    assert_eq!(summary.ratio_b_display, "160");
    assert_eq!(summary.token_a_liquidity, "10");
    assert!(summary.precision_fallback);
    assert_eq!(summary.pool_address().unwrap(), pool.address);
    assert_eq!(summary.mints().unwrap(), (pool.token_a_mint, pool.token_b_mint));
}

#[test]
fn test_sdk_rejects_invalid_config() {
    let config = SdkConfig {
        fallback_decimals: 10,
        ..SdkConfig::default()
    };
    assert!(FixedRatioSDK::new(config).is_err());

    let config = SdkConfig::default().with_pool_state_seed(&[]);
    assert!(FixedRatioSDK::new(config).is_err());
}
