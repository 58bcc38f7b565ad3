// Blackbox tests for voter eligibility, the accusation engine and
// the bounty ledger. The RevokeHook binding stays unconfigured here
// so denials resolve without a cross-contract callback; the full
// denial -> collaborator -> revoke cycle runs in scenario JSON tests
// with a mock collaborator.

use level_pool::pool_proxy;
use level_pool::types::GatedOp;
use level_pool::{
    ERR_ALREADY_DENIED, ERR_ALREADY_VOTED, ERR_COOLDOWN_ACTIVE, ERR_FUTURE_ERA,
    ERR_INSUFFICIENT_POINTS, ERR_NOTHING_TO_WITHDRAW, ERR_UNAUTHORIZED,
};
use multiversx_sc_scenario::api::StaticApi;
use multiversx_sc_scenario::imports::*;

const OWNER: TestAddress = TestAddress::new("owner");
const INSPECTION: TestAddress = TestAddress::new("inspection");
const ACCUSED: TestAddress = TestAddress::new("accused");
const SECOND_ACCUSED: TestAddress = TestAddress::new("second-accused");
const VOTERS: [TestAddress; 10] = [
    TestAddress::new("voter-1"),
    TestAddress::new("voter-2"),
    TestAddress::new("voter-3"),
    TestAddress::new("voter-4"),
    TestAddress::new("voter-5"),
    TestAddress::new("voter-6"),
    TestAddress::new("voter-7"),
    TestAddress::new("voter-8"),
    TestAddress::new("voter-9"),
    TestAddress::new("voter-10"),
];
const POOL: TestSCAddress = TestSCAddress::new("level-pool");
const CODE_PATH: MxscPath = MxscPath::new("output/level-pool.mxsc.json");

const TICKS_PER_ERA: u64 = 100;
const ERAS_PER_EPOCH: u64 = 12;
const MAX_LEVELS_PER_EVENT: u64 = 192;
const TIME_BETWEEN_VOTES: u64 = 10;

fn pool_supply() -> BigUint<StaticApi> {
    BigUint::from(40_000_000u64) * BigUint::from(10u64).pow(18)
}

fn bounty_supply() -> BigUint<StaticApi> {
    BigUint::from(10_000_000u64) * BigUint::from(10u64).pow(18)
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, level_pool::ContractBuilder);
    blockchain
}

fn setup_with_cooldown(time_between_votes: u64) -> ScenarioWorld {
    let mut world = world();
    world.account(OWNER).nonce(1);
    world.account(INSPECTION).nonce(1);
    for voter in VOTERS {
        world.account(voter).nonce(1);
    }
    world.current_block().block_nonce(0);

    world
        .tx()
        .from(OWNER)
        .typed(pool_proxy::LevelPoolProxy)
        .init(
            TICKS_PER_ERA,
            ERAS_PER_EPOCH,
            pool_supply(),
            bounty_supply(),
            MAX_LEVELS_PER_EVENT,
            time_between_votes,
        )
        .code(CODE_PATH)
        .new_address(POOL)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bind_caller(GatedOp::Credit, INSPECTION)
        .run();

    world
}

fn set_tick(world: &mut ScenarioWorld, tick: u64) {
    world.current_block().block_nonce(tick);
}

fn credit(world: &mut ScenarioWorld, account: TestAddress, amount: u64, era: u64, key: &str) {
    world
        .tx()
        .from(INSPECTION)
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .credit(account, amount, era, key)
        .run();
}

/// Ten-strong voter population: the first two voters sit well above
/// the average, the other eight at one level each.
fn setup_population() -> ScenarioWorld {
    let mut world = setup_with_cooldown(TIME_BETWEEN_VOTES);
    credit(&mut world, VOTERS[0], 5, 1, "work-1");
    credit(&mut world, VOTERS[1], 5, 1, "work-2");
    for (i, voter) in VOTERS.iter().enumerate().skip(2) {
        credit(&mut world, *voter, 1, 1, &format!("work-{}", i + 1));
    }
    world
}

fn accuse(world: &mut ScenarioWorld, voter: TestAddress, accused: TestAddress, era: u64) {
    world
        .tx()
        .from(voter)
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accuse(accused, era, "cheated on verification")
        .run();
}

// ============================================================
// Eligibility
// ============================================================

#[test]
fn bootstrap_population_is_always_eligible() {
    let mut world = setup_with_cooldown(TIME_BETWEEN_VOTES);

    // Nobody holds levels yet: nobody can act.
    let eligible = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .is_eligible_voter(VOTERS[0])
        .returns(ReturnsResult)
        .run();
    assert!(!eligible);

    // With five or fewer participants the average rule is suspended,
    // even for accounts holding nothing.
    credit(&mut world, VOTERS[0], 3, 1, "work-1");
    for voter in [VOTERS[0], VOTERS[9]] {
        let eligible = world
            .query()
            .to(POOL)
            .typed(pool_proxy::LevelPoolProxy)
            .is_eligible_voter(voter)
            .returns(ReturnsResult)
            .run();
        assert!(eligible);
    }
}

#[test]
fn mature_population_requires_strictly_above_average() {
    let mut world = setup_with_cooldown(TIME_BETWEEN_VOTES);

    for i in 0..6 {
        credit(&mut world, VOTERS[i], 1, 1, &format!("work-{}", i + 1));
    }

    // Six participants, all exactly at the mean: nobody qualifies.
    for i in 0..6 {
        let eligible = world
            .query()
            .to(POOL)
            .typed(pool_proxy::LevelPoolProxy)
            .is_eligible_voter(VOTERS[i])
            .returns(ReturnsResult)
            .run();
        assert!(!eligible);
    }

    // One extra level tips the first voter over the mean.
    credit(&mut world, VOTERS[0], 1, 1, "work-7");
    let eligible = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .is_eligible_voter(VOTERS[0])
        .returns(ReturnsResult)
        .run();
    assert!(eligible);
    let eligible = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .is_eligible_voter(VOTERS[1])
        .returns(ReturnsResult)
        .run();
    assert!(!eligible);
}

// ============================================================
// Quorum schedule
// ============================================================

#[test]
fn quorum_schedule_boundaries() {
    let mut world = setup_with_cooldown(TIME_BETWEEN_VOTES);

    let quorum = |world: &mut ScenarioWorld, population: u64| {
        world
            .query()
            .to(POOL)
            .typed(pool_proxy::LevelPoolProxy)
            .quorum_for(population)
            .returns(ReturnsResult)
            .run()
    };

    assert_eq!(quorum(&mut world, 0), 2);
    assert_eq!(quorum(&mut world, 11), 2);
    assert_eq!(quorum(&mut world, 12), 5);
    assert_eq!(quorum(&mut world, 166), 5);
    assert_eq!(quorum(&mut world, 167), 6);
    assert_eq!(quorum(&mut world, 1000), 31);
    assert_eq!(quorum(&mut world, 100_000), 360);
}

// ============================================================
// Accusation & denial
// ============================================================

#[test]
fn two_votes_deny_in_a_small_population() {
    let mut world = setup_population();
    set_tick(&mut world, 4 * TICKS_PER_ERA); // era 5

    // Population of ten: quorum is two.
    let quorum = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .current_quorum()
        .returns(ReturnsResult)
        .run();
    assert_eq!(quorum, 2);

    accuse(&mut world, VOTERS[0], ACCUSED, 5);

    let denied = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .is_denied(ACCUSED)
        .returns(ReturnsResult)
        .run();
    assert!(!denied);

    accuse(&mut world, VOTERS[1], ACCUSED, 5);

    let denied = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .is_denied(ACCUSED)
        .returns(ReturnsResult)
        .run();
    assert!(denied);

    let round = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accusation(ACCUSED, 5u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(round.vote_count, 2);
    assert_eq!(round.hunter, VOTERS[0].to_managed_address());

    // The first accuser holds one level in the bounty ledger for the
    // era the denial landed in.
    let entry = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_entry(VOTERS[0], 5u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(entry.levels, 1);
    let bounty_accounting = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_era_accounting(5u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(bounty_accounting.total_levels, 1);

    // Both voters earned a point regardless of the outcome.
    for voter in [VOTERS[0], VOTERS[1]] {
        let points = world
            .query()
            .to(POOL)
            .typed(pool_proxy::LevelPoolProxy)
            .voter_points(voter)
            .returns(ReturnsResult)
            .run();
        assert_eq!(points, 1);
    }

    // Denial is terminal: no further accusations are accepted.
    world
        .tx()
        .from(VOTERS[1])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accuse(ACCUSED, 5u64, "again")
        .returns(ExpectError(4, ERR_ALREADY_DENIED))
        .run();
    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accuse(ACCUSED, 6u64, "other era")
        .returns(ExpectError(4, ERR_ALREADY_DENIED))
        .run();
}

#[test]
fn ineligible_voters_cannot_accuse() {
    let mut world = setup_population();

    world
        .tx()
        .from(VOTERS[5])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accuse(ACCUSED, 1u64, "average voter")
        .returns(ExpectError(4, ERR_UNAUTHORIZED))
        .run();
}

#[test]
fn vote_cooldown_and_double_votes_are_rejected() {
    let mut world = setup_population();
    set_tick(&mut world, 1000);

    accuse(&mut world, VOTERS[0], ACCUSED, 11);

    // Second vote inside the cooldown window, even against another
    // account.
    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accuse(SECOND_ACCUSED, 11u64, "too soon")
        .returns(ExpectError(4, ERR_COOLDOWN_ACTIVE))
        .run();

    set_tick(&mut world, 1000 + TIME_BETWEEN_VOTES);

    // Cooldown has passed, but the same (voter, accused, era) triple
    // stays spent forever.
    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .accuse(ACCUSED, 11u64, "same triple")
        .returns(ExpectError(4, ERR_ALREADY_VOTED))
        .run();

    // A different era is a fresh round.
    accuse(&mut world, VOTERS[0], ACCUSED, 12);
}

// ============================================================
// Voter points
// ============================================================

#[test]
fn fifty_points_convert_into_one_bounty_level() {
    let mut world = setup_with_cooldown(0);
    credit(&mut world, VOTERS[0], 1, 1, "work-1");

    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .convert_points_to_level()
        .returns(ExpectError(4, ERR_INSUFFICIENT_POINTS))
        .run();

    // One vote per era round: fifty accusation votes, none of which
    // reaches the two-vote quorum on its own.
    for era in 1..=50u64 {
        accuse(&mut world, VOTERS[0], ACCUSED, era);
    }
    let points = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .voter_points(VOTERS[0])
        .returns(ReturnsResult)
        .run();
    assert_eq!(points, 50);

    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .convert_points_to_level()
        .run();

    let points = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .voter_points(VOTERS[0])
        .returns(ReturnsResult)
        .run();
    assert_eq!(points, 0);
    let entry = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_entry(VOTERS[0], 1u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(entry.levels, 1);

    // The balance is spent; a second conversion needs fifty more.
    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .convert_points_to_level()
        .returns(ExpectError(4, ERR_INSUFFICIENT_POINTS))
        .run();
}

// ============================================================
// Bounty withdrawal
// ============================================================

#[test]
fn bounty_withdrawal_steps_the_claim_pointer() {
    let mut world = setup_population();
    set_tick(&mut world, 4 * TICKS_PER_ERA); // era 5

    accuse(&mut world, VOTERS[0], ACCUSED, 5);
    accuse(&mut world, VOTERS[1], ACCUSED, 5);

    // The hunter's claims start at the era of their first vote.
    let pointer = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_next_claim_era(VOTERS[0])
        .returns(ReturnsResult)
        .run();
    assert_eq!(pointer, 5);

    // Era 5 is still open.
    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .withdraw_bounty()
        .returns(ExpectError(4, ERR_FUTURE_ERA))
        .run();

    set_tick(&mut world, 5 * TICKS_PER_ERA); // era 6

    // Sole bounty holder of era 5: the full per-era bounty emission.
    let expected = (bounty_supply() / 2u64) / ERAS_PER_EPOCH;
    let payout = world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .withdraw_bounty()
        .returns(ReturnsResult)
        .run();
    assert_eq!(payout, expected);

    // The pointer moved to era 6, which is still open.
    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .withdraw_bounty()
        .returns(ExpectError(4, ERR_FUTURE_ERA))
        .run();

    // An empty era pays zero and still advances.
    set_tick(&mut world, 6 * TICKS_PER_ERA); // era 7
    let payout = world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .withdraw_bounty()
        .returns(ReturnsResult)
        .run();
    assert_eq!(payout, BigUint::zero());
    let pointer = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_next_claim_era(VOTERS[0])
        .returns(ReturnsResult)
        .run();
    assert_eq!(pointer, 7);

    // Voters who never voted have nothing to step through.
    world
        .tx()
        .from(VOTERS[9])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .withdraw_bounty()
        .returns(ExpectError(4, ERR_NOTHING_TO_WITHDRAW))
        .run();
}

#[test]
fn hunter_bounty_is_granted_once_per_denial() {
    let mut world = setup_population();
    set_tick(&mut world, 4 * TICKS_PER_ERA);

    accuse(&mut world, VOTERS[0], ACCUSED, 5);
    accuse(&mut world, VOTERS[1], ACCUSED, 5);

    let entry = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_entry(VOTERS[0], 5u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(entry.levels, 1);

    // A second, unrelated denial rewards its own hunter.
    set_tick(&mut world, 4 * TICKS_PER_ERA + 2 * TIME_BETWEEN_VOTES);
    accuse(&mut world, VOTERS[1], SECOND_ACCUSED, 5);
    accuse(&mut world, VOTERS[0], SECOND_ACCUSED, 5);

    let entry = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_entry(VOTERS[1], 5u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(entry.levels, 1);
    let accounting = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_era_accounting(5u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(accounting.total_levels, 2);
}

// ============================================================
// Withdrawn bounty entries stay withdrawn
// ============================================================

#[test]
fn bounty_era_cannot_be_claimed_twice() {
    let mut world = setup_with_cooldown(0);
    credit(&mut world, VOTERS[0], 1, 1, "work-1");

    accuse(&mut world, VOTERS[0], ACCUSED, 1);
    set_tick(&mut world, TICKS_PER_ERA); // era 2

    world
        .tx()
        .from(VOTERS[0])
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .withdraw_bounty()
        .run();

    // The pointer now stands at era 2; rewinding is impossible, so
    // the withdrawn flag of era 1 can never be hit again through the
    // endpoint. The flag still holds the paid amount for inspection.
    let entry = world
        .query()
        .to(POOL)
        .typed(pool_proxy::LevelPoolProxy)
        .bounty_entry(VOTERS[0], 1u64)
        .returns(ReturnsResult)
        .run();
    assert!(entry.withdrawn);
    assert_eq!(entry.tokens_withdrawn, BigUint::zero());
}
