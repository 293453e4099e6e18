use fairway_core::allowance::AllowanceMethod;

/// USGA-style weights by team size, applied lowest handicap first.
const USGA_WEIGHTS_2: [f64; 2] = [0.35, 0.15];
const USGA_WEIGHTS_3: [f64; 3] = [0.20, 0.15, 0.10];
const USGA_WEIGHTS_4: [f64; 4] = [0.20, 0.15, 0.10, 0.05];

/// Combine individual handicaps into one team handicap, rounded to one
/// decimal place.
///
/// Returns `None` when the method has no allowance for this team: a USGA
/// team outside 2-4 players, or an empty Ambrose team. A `Some(0.0)` result
/// is a genuine scratch allowance.
pub fn team_handicap(handicaps: &[f64], method: &AllowanceMethod) -> Option<f64> {
    let raw = match method {
        AllowanceMethod::None => 0.0,
        AllowanceMethod::Usga => {
            let weights: &[f64] = match handicaps.len() {
                2 => &USGA_WEIGHTS_2,
                3 => &USGA_WEIGHTS_3,
                4 => &USGA_WEIGHTS_4,
                n => {
                    tracing::debug!(team_size = n, "No USGA allowance for team size");
                    return None;
                },
            };
            weighted_sum(&sorted(handicaps), weights)
        },
        AllowanceMethod::Ambrose => {
            if handicaps.is_empty() {
                return None;
            }
            handicaps.iter().sum::<f64>() / (handicaps.len() as f64 * 2.0)
        },
        AllowanceMethod::Percentage(percentages) => {
            let weights: Vec<f64> = percentages.iter().map(|p| p / 100.0).collect();
            weighted_sum(&sorted(handicaps), &weights)
        },
    };
    Some(round_to_tenth(raw))
}

/// Handicap a foursomes side plays off: the given share of the pair's
/// combined handicap.
pub fn foursomes_handicap(pair: &[f64], allowance_percent: f64) -> f64 {
    round_to_tenth(pair.iter().sum::<f64>() * allowance_percent / 100.0)
}

fn sorted(handicaps: &[f64]) -> Vec<f64> {
    let mut copy = handicaps.to_vec();
    copy.sort_by(f64::total_cmp);
    copy
}

fn weighted_sum(handicaps: &[f64], weights: &[f64]) -> f64 {
    handicaps.iter().zip(weights).map(|(h, w)| h * w).sum()
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
