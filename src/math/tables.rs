//! Compiled-in constants of the hyperbolic cosine kernels.
//!
//! Each precision carries three groups of read-only data:
//!
//! - **Seed table**: `sinh(i)` and `cosh(i)` for every integer `i` in `[0, 36]`,
//!   stored as a head (the value rounded to working precision) and a tail (the
//!   rounding error of the head, rounded again). Head plus tail carries the
//!   seed to roughly twice the working precision.
//! - **Polynomial coefficients**: minimax fits of `(sinh(r) - r) / r^3` and
//!   `(cosh(r) - 1) / r^2` as polynomials in `r^2` on `[0, 1)`, highest degree
//!   first for Horner evaluation.
//! - **Thresholds**: the magnitudes at which the evaluation switches region.
//!
//! Nothing here is mutable; all of it is safe to read from any thread or lane.

/// Largest integer part the seed table covers.
pub const SEED_MAX: usize = 36;

/// Number of entries in each seed column (`0..=SEED_MAX`).
pub const SEED_COUNT: usize = SEED_MAX + 1;

/// Tabulated `sinh(i)` / `cosh(i)` seeds for one precision.
///
/// For every index `i`, `sinh_head[i] + sinh_tail[i]` approximates `sinh(i)`
/// (and likewise for `cosh`) to well beyond working precision, with
/// `|tail| <= ulp(head) / 2`.
#[derive(Debug)]
pub struct SeedTable<T> {
    pub sinh_head: [T; SEED_COUNT],
    pub sinh_tail: [T; SEED_COUNT],
    pub cosh_head: [T; SEED_COUNT],
    pub cosh_tail: [T; SEED_COUNT],
}

// ================================================================================================
// SINGLE PRECISION
// ================================================================================================

pub static F32_SEEDS: SeedTable<f32> = SeedTable {
    sinh_head: [
        0.0, 1.1752012, 3.6268604, 10.017875,
        27.289917, 74.20321, 201.71315, 548.3161,
        1490.4789, 4051.542, 11013.232, 29937.07,
        81377.4, 221206.7, 601302.1, 1634508.6,
        4443055.5, 12077476.0, 32829984.0, 8.924115e7,
        2.425826e8, 6.594079e8, 1.7924564e9, 4.872402e9,
        1.3244561e10, 3.600245e10, 9.78648e10, 2.6602412e11,
        7.2312855e11, 1.9656671e12, 5.343237e12, 1.4524425e13,
        3.948148e13, 1.0732179e14, 2.9173086e14, 7.930067e14,
        2.1556158e15,
    ],
    sinh_tail: [
        0.0, 1.6046755e-8, 2.767429e-8, 2.096975e-7,
        2.0494025e-7, 1.654449e-6, 7.345865e-6, 2.2199029e-5,
        -5.604639e-5, -9.010471e-5, 0.0004528284, 0.00053674803,
        -0.0027310702, -0.00712167, 0.017081972, 0.0612359,
        -0.23974612, 0.37678763, 0.56866527, -1.5184064,
        5.704895, -4.758393, -24.934204, -196.87555,
        -343.07828, -1787.307, 2410.4194, -4115.1006,
        -17230.262, 25372.021, 178954.23, -80272.29,
        1611468.4, 2738526.0, 15966703.0, 3641771.2,
        7635805.5,
    ],
    cosh_head: [
        1.0, 1.5430807, 3.7621956, 10.067662,
        27.308233, 74.209946, 201.71564, 548.317,
        1490.4791, 4051.542, 11013.233, 29937.07,
        81377.4, 221206.7, 601302.1, 1634508.6,
        4443055.5, 12077476.0, 32829984.0, 8.924115e7,
        2.425826e8, 6.594079e8, 1.7924564e9, 4.872402e9,
        1.3244561e10, 3.600245e10, 9.78648e10, 2.6602412e11,
        7.2312855e11, 1.9656671e12, 5.343237e12, 1.4524425e13,
        3.948148e13, 1.0732179e14, 2.9173086e14, 7.930067e14,
        2.1556158e15,
    ],
    cosh_tail: [
        0.0, -5.2707644e-8, 1.0392543e-7, -2.4329694e-7,
        -4.250919e-7, 2.846077e-6, -1.0845754e-6, 1.855365e-5,
        3.5275614e-5, 3.3305096e-5, -0.00047833417, 0.00055344973,
        -0.002724926, -0.0071194097, 0.017082805, 0.061236206,
        -0.239746, 0.37678766, 0.56866527, -1.5184064,
        5.704895, -4.758393, -24.934204, -196.87555,
        -343.07828, -1787.307, 2410.4194, -4115.1006,
        -17230.262, 25372.021, 178954.23, -80272.29,
        1611468.4, 2738526.0, 15966703.0, 3641771.2,
        7635805.5,
    ],
};

/// `(sinh(r) - r) / r^3` in powers of `r^2`, degree 5.
pub const F32_SINH_COEFFS: [f32; 6] = [
    0.160576793121939886190847e-9,
    0.250521176994133472333666e-7,
    0.275573191913636406057211e-5,
    0.198412698413242405162014e-3,
    0.833333333333329931873097e-2,
    0.166666666666666667013899e0,
];

/// `(cosh(r) - 1) / r^2` in powers of `r^2`, degree 5.
pub const F32_COSH_COEFFS: [f32; 6] = [
    0.208744349831471353536305e-8,
    0.275573350756016588011357e-6,
    0.248015872460622433115785e-4,
    0.138888888889814854814536e-2,
    0.416666666666660876512776e-1,
    0.500000000000000005911074e0,
];

/// `ln(2^12)`: beyond it `exp(-y)` is below half an ULP of `exp(y)`.
pub const F32_SMALL_THRESHOLD: f32 = 8.317766;

/// First magnitude whose cosh overflows single precision.
pub const F32_MAX_ARG: f32 = 89.41599;

/// `2^-14`: below it `cosh(y)` rounds to exactly one.
pub const F32_UNDERFLOW_THRESHOLD: f32 = 6.1035156e-5;

/// `ln(2)` truncated to 17 significant bits, so `y - F32_LN2_TRUNCATED` is exact.
pub const F32_LN2_TRUNCATED: f32 = 0.6931534;

/// `exp(F32_LN2_TRUNCATED - ln(2)) - 1`.
pub const F32_HALF_EXP_CORRECTION: f32 = 6.200807e-6;

// ================================================================================================
// DOUBLE PRECISION
// ================================================================================================

#[cfg(feature = "fp64")]
pub static F64_SEEDS: SeedTable<f64> = SeedTable {
    sinh_head: [
        0.0, 1.1752011936438014, 3.6268604078470186, 10.017874927409903,
        27.289917197127753, 74.20321057778875, 201.71315737027922, 548.3161232732465,
        1490.4788257895502, 4051.54190208279, 11013.232874703393, 29937.07084924806,
        81377.39570642986, 221206.6960033301, 601302.1420819727, 1634508.6862359024,
        4443055.26025388, 12077476.376787629, 32829984.568665247, 89241150.48159362,
        242582597.70489514, 659407867.2416073, 1792456423.065796, 4872401723.124452,
        13244561064.921736, 36002449668.69294, 97864804714.41939, 266024120300.89932,
        723128532145.7375, 1965667148572.021, 5343237290762.231, 14524424832623.713,
        39481480091340.34, 107321789892958.03, 291730871263727.44, 793006726156715.4,
        2155615773557597.5,
    ],
    sinh_tail: [
        0.0, 7.849672142285669e-17, 1.9291196578353674e-16, -6.97789774734877e-16,
        -7.633630011960991e-16, 6.687957117824193e-15, 8.575934656268528e-15, 3.278482817431654e-14,
        -4.2248656174397954e-14, 8.567585997621286e-14, -8.604166474664442e-14, -1.1589261343159848e-13,
        -5.0467284870835705e-12, 1.3001612321724303e-12, -5.2745570681883295e-11, 3.193597523847964e-12,
        -1.2217375852576808e-10, -5.707917058034138e-10, 5.438675668952861e-10, 3.863694432403071e-9,
        -7.865629467297586e-10, 3.983811507282081e-8, -1.1773639343165424e-7, -3.37302059461997e-7,
        3.8350090071618456e-7, -3.4962270494888696e-6, -5.682497168106466e-6, -1.416789291259382e-5,
        3.801039836577846e-5, 4.1100560163238483e-5, -0.0003718172657214174, -0.00027508215896137245,
        0.003830489011311222, 0.001062148880763301, 0.0032014513673043385, -0.010935177687112985,
        0.11355671114642835,
    ],
    cosh_head: [
        1.0, 1.5430806348152437, 3.7621956910836314, 10.067661995777765,
        27.308232836016487, 74.20994852478785, 201.7156361224559, 548.3170351552121,
        1490.479161252178, 4051.542025492594, 11013.232920103323, 29937.07086594976,
        81377.39571257407, 221206.6960055904, 601302.1420828041, 1634508.6862362083,
        4443055.260253993, 12077476.37678767, 32829984.568665262, 89241150.48159364,
        242582597.70489514, 659407867.2416073, 1792456423.065796, 4872401723.124452,
        13244561064.921736, 36002449668.69294, 97864804714.41939, 266024120300.89932,
        723128532145.7375, 1965667148572.021, 5343237290762.231, 14524424832623.713,
        39481480091340.34, 107321789892958.03, 291730871263727.44, 793006726156715.4,
        2155615773557597.5,
    ],
    cosh_tail: [
        0.0, 6.606796775006833e-17, 7.146584908813439e-17, 5.150335194797485e-16,
        8.480712398000987e-17, -3.2016056277777725e-15, 3.783693368181859e-15, -4.777413949159163e-14,
        1.5145360357524317e-14, 1.537627146995795e-13, 5.270175982407637e-13, -1.7325097047684152e-12,
        -4.2045279280626504e-12, 1.0818550520140794e-11, 3.7745044917555944e-11, -3.395166183505605e-11,
        -2.7703056773955395e-10, -1.496078010328019e-10, 8.726861177602583e-10, -5.4346703239073175e-9,
        1.2745906757087991e-9, 4.0596371115611994e-8, -1.1745744662236734e-7, -3.3719944066568e-7,
        3.8353865206162735e-7, -3.4962131615450046e-6, -5.682492059017438e-6, -1.4167891033065002e-5,
        3.8010399057218467e-5, 4.1100560417605046e-5, -0.0003718172656278412, -0.0002750821589269477,
        0.003830489011323886, 0.0010621488807679598, 0.0032014513673060524, -0.010935177687112354,
        0.11355671114642858,
    ],
};

/// `(sinh(r) - r) / r^3` in powers of `r^2`, degree 6.
#[cfg(feature = "fp64")]
pub const F64_SINH_COEFFS: [f64; 7] = [
    0.7746188980094184251527126e-12,
    0.160576793121939886190847e-9,
    0.250521176994133472333666e-7,
    0.275573191913636406057211e-5,
    0.198412698413242405162014e-3,
    0.833333333333329931873097e-2,
    0.166666666666666667013899e0,
];

/// `(cosh(r) - 1) / r^2` in powers of `r^2`, degree 6.
#[cfg(feature = "fp64")]
pub const F64_COSH_COEFFS: [f64; 7] = [
    0.1163921388172173692062032e-10,
    0.208744349831471353536305e-8,
    0.275573350756016588011357e-6,
    0.248015872460622433115785e-4,
    0.138888888889814854814536e-2,
    0.416666666666660876512776e-1,
    0.500000000000000005911074e0,
];

/// `ln(2^27)`: beyond it `exp(-y)` is below half an ULP of `exp(y)`.
#[cfg(feature = "fp64")]
pub const F64_SMALL_THRESHOLD: f64 = 18.714973875118524;

/// `ln(2^1025)`, the first magnitude whose cosh overflows double precision.
#[cfg(feature = "fp64")]
pub const F64_MAX_ARG: f64 = 710.475860073944;

/// `2^-28`: below it `cosh(y)` rounds to exactly one.
#[cfg(feature = "fp64")]
pub const F64_UNDERFLOW_THRESHOLD: f64 = 3.725290298461914e-9;

/// `ln(2)` with its low 11 bits cleared, so `y - F64_LN2_TRUNCATED` is exact.
#[cfg(feature = "fp64")]
pub const F64_LN2_TRUNCATED: f64 = 0.6931471805598903;

/// `exp(F64_LN2_TRUNCATED - ln(2)) - 1`.
#[cfg(feature = "fp64")]
pub const F64_HALF_EXP_CORRECTION: f64 = -5.4979230187082203e-14;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_index_domain() {
        assert_eq!(SEED_COUNT, 37);
        assert_eq!(F32_SEEDS.cosh_head.len(), SEED_COUNT);
        assert_eq!(F32_SEEDS.sinh_tail.len(), SEED_COUNT);
    }

    #[test]
    fn test_f32_seeds_match_std() {
        for i in 0..SEED_COUNT {
            let x = i as f64;
            let sinh = F32_SEEDS.sinh_head[i] as f64 + F32_SEEDS.sinh_tail[i] as f64;
            let cosh = F32_SEEDS.cosh_head[i] as f64 + F32_SEEDS.cosh_tail[i] as f64;
            assert!(((sinh - x.sinh()) / x.cosh()).abs() < 1e-12, "sinh seed {i}");
            assert!(((cosh - x.cosh()) / x.cosh()).abs() < 1e-12, "cosh seed {i}");
            assert_eq!(F32_SEEDS.cosh_head[i], x.cosh() as f32, "cosh head {i}");
        }
    }

    #[test]
    fn test_f32_tails_below_half_ulp() {
        for i in 1..SEED_COUNT {
            let head = F32_SEEDS.cosh_head[i];
            let half_ulp = (f32::from_bits(head.to_bits() + 1) - head) / 2.0;
            assert!(F32_SEEDS.cosh_tail[i].abs() <= half_ulp, "cosh tail {i}");
        }
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(0.0 < F32_UNDERFLOW_THRESHOLD);
        assert!(F32_UNDERFLOW_THRESHOLD < F32_SMALL_THRESHOLD);
        // the table covers every integer part the table path can see
        assert!(F32_SMALL_THRESHOLD < SEED_MAX as f32);
        assert!(F32_SMALL_THRESHOLD < F32_MAX_ARG);
        assert_eq!(F32_UNDERFLOW_THRESHOLD, 2.0f32.powi(-14));
    }

    #[cfg(feature = "fp64")]
    #[test]
    fn test_f64_seeds_heads() {
        assert_eq!(F64_SEEDS.cosh_head[0], 1.0);
        assert_eq!(F64_SEEDS.sinh_head[0], 0.0);
        assert_eq!(F64_SEEDS.cosh_head[1], 1.5430806348152437);
        assert_eq!(F64_SEEDS.sinh_head[20], 242582597.70489514);
        for i in 1..SEED_COUNT {
            let head = F64_SEEDS.sinh_head[i];
            let half_ulp = (f64::from_bits(head.to_bits() + 1) - head) / 2.0;
            assert!(F64_SEEDS.sinh_tail[i].abs() <= half_ulp, "sinh tail {i}");
        }
    }

    #[cfg(feature = "fp64")]
    #[test]
    fn test_f64_constants() {
        assert_eq!(F64_UNDERFLOW_THRESHOLD, 2.0f64.powi(-28));
        assert!(F64_SMALL_THRESHOLD < SEED_MAX as f64);
        assert!(F64_SMALL_THRESHOLD < F64_MAX_ARG);
        assert!(((std::f64::consts::LN_2 - F64_LN2_TRUNCATED) + F64_HALF_EXP_CORRECTION).abs() < 1e-16);
        // the truncated constant leaves room for exact subtraction
        assert_eq!(F64_LN2_TRUNCATED.to_bits() & 0x7ff, 0);
    }
}
