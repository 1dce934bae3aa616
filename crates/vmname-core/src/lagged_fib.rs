//! First output of the seeded additive lagged Fibonacci generator used to
//! mint cluster IDs.
//!
//! The generator keeps 607 words (`x[n] = x[n-607] + x[n-273] mod 2^64`).
//! Seeding fills them from a Park-Miller sequence XORed with a fixed table
//! ("cooked" state). The first draw only reads the words at the feed and tap
//! positions, so only those two table entries are kept here.

const RNG_LEN: usize = 607;
const RNG_TAP: usize = 273;
/// Park-Miller modulus, 2^31 - 1.
const INT32_MAX: i64 = (1 << 31) - 1;
/// Replacement for a seed that reduces to zero.
const ZERO_SEED: i64 = 89_482_311;

/// Words read by the first draw.
const FEED_INDEX: usize = RNG_LEN - RNG_TAP - 1;
const TAP_INDEX: usize = RNG_LEN - 1;
const COOKED_FEED: u64 = -4_633_371_852_008_891_965i64 as u64;
const COOKED_TAP: u64 = 4_152_330_101_494_654_406i64 as u64;

/// `x * 48271 mod (2^31 - 1)`.
fn seedrand(x: i64) -> i64 {
    x * 48_271 % INT32_MAX
}

/// The first 32-bit value drawn from a generator seeded with `seed`.
pub(crate) fn first_u32(seed: i64) -> u32 {
    // Truncating remainder, then folded into [1, 2^31 - 2].
    let mut seed = seed % INT32_MAX;
    if seed < 0 {
        seed += INT32_MAX;
    }
    if seed == 0 {
        seed = ZERO_SEED;
    }

    let mut x = seed;
    let mut feed = 0u64;
    let mut tap = 0u64;
    for i in -20..RNG_LEN as i64 {
        x = seedrand(x);
        if i < 0 {
            continue;
        }
        let mut u = (x as u64) << 40;
        x = seedrand(x);
        u ^= (x as u64) << 20;
        x = seedrand(x);
        u ^= x as u64;
        match i as usize {
            FEED_INDEX => feed = u ^ COOKED_FEED,
            TAP_INDEX => tap = u ^ COOKED_TAP,
            _ => {}
        }
    }

    let int63 = feed.wrapping_add(tap) & (u64::MAX >> 1);
    (int63 >> 31) as u32
}
