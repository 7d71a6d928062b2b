//! Unique username generation from a person's given and family name.

use tracing::{debug, trace, warn};

use crate::error::{Result, RosternameError};
use crate::existing::UsernameSet;
use crate::rules::ReplacementRules;

/// Smallest `min_length` a caller may request.
pub const MIN_LENGTH_FLOOR: usize = 6;

/// Each name part contributes at least this many characters when available.
const MIN_PART_LENGTH: usize = 2;

/// Builds collision-free usernames out of normalized name parts.
///
/// The replacement table is fixed at construction, so one generator can be
/// shared across threads. Callers own the set of taken usernames and must
/// serialize updates to it themselves.
#[derive(Debug, Clone, Default)]
pub struct UsernameGenerator {
    rules: ReplacementRules,
}

impl UsernameGenerator {
    /// Create a generator. `None` selects the default replacement table.
    pub fn new(rules: Option<ReplacementRules>) -> Self {
        Self {
            rules: rules.unwrap_or_default(),
        }
    }

    pub fn rules(&self) -> &ReplacementRules {
        &self.rules
    }

    /// Generate the first free username in search order.
    ///
    /// Search order: given-name-first, then family-name-first. Within each order,
    /// lengths run from `min_length` to `max_length`; at each length the unsuffixed
    /// candidate is tried, then zero-padded numeric suffixes `1..=10^w - 1` where
    /// `w = max(1, length / 3)`.
    ///
    /// The search has no cap. At `max_length = 20` a single length can try up to
    /// 999,999 suffixes, so a heavily populated `existing` set with a wide range
    /// is slow to exhaust.
    ///
    /// # Errors
    ///
    /// - [`RosternameError::InvalidArgument`] if either name is blank.
    /// - [`RosternameError::InvalidRange`] if `min_length < 6` or `max_length < min_length`.
    /// - [`RosternameError::Exhausted`] if every candidate is taken.
    pub fn generate_unique_username<E>(
        &self,
        first_name: &str,
        last_name: &str,
        min_length: usize,
        max_length: usize,
        existing: &E,
    ) -> Result<String>
    where
        E: UsernameSet + ?Sized,
    {
        if first_name.trim().is_empty() {
            return Err(RosternameError::InvalidArgument("first name empty".into()));
        }
        if last_name.trim().is_empty() {
            return Err(RosternameError::InvalidArgument("last name empty".into()));
        }
        if min_length < MIN_LENGTH_FLOOR {
            return Err(RosternameError::InvalidRange(
                "minLength below floor".into(),
            ));
        }
        if max_length < min_length {
            return Err(RosternameError::InvalidRange(
                "maxLength below minLength".into(),
            ));
        }

        let first = self.normalize(first_name);
        let last = self.normalize(last_name);

        for reverse_order in [false, true] {
            for length in min_length..=max_length {
                let base = compose(&first, &last, length, "", reverse_order);
                if !existing.contains_username(&base) {
                    debug!(username = %base, length, reverse_order, "selected base username");
                    return Ok(base);
                }
                trace!(candidate = %base, "base username taken");

                let digits = suffix_digits(length);
                for suffix_num in 1..=max_suffix_number(digits) {
                    let suffix = format!("{suffix_num:0digits$}");
                    let available = match length.checked_sub(suffix.len()) {
                        Some(n) if n >= MIN_PART_LENGTH => n,
                        _ => continue,
                    };

                    let candidate = compose(&first, &last, available, &suffix, reverse_order);
                    if !existing.contains_username(&candidate) {
                        debug!(
                            username = %candidate,
                            length,
                            reverse_order,
                            suffix = %suffix,
                            "selected suffixed username"
                        );
                        return Ok(candidate);
                    }
                }
            }
        }

        warn!(min_length, max_length, "no unique username available");
        Err(RosternameError::Exhausted(
            "no unique username available in range".into(),
        ))
    }

    /// Build one candidate of (at most) `total_length` name characters plus `suffix`.
    ///
    /// The leading part takes `max(total_length / 2, 2)` characters; the trailing part
    /// fills the remainder. Short names are used whole and never padded, so the
    /// result may be shorter than requested.
    pub fn build_base_username(
        &self,
        first_name: &str,
        last_name: &str,
        total_length: usize,
        suffix: &str,
        reverse_order: bool,
    ) -> String {
        let first = self.normalize(first_name);
        let last = self.normalize(last_name);
        compose(&first, &last, total_length, suffix, reverse_order)
    }

    /// Apply the replacement table, then drop everything outside `[A-Za-z0-9]`.
    pub fn normalize(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }
        self.rules
            .apply(input)
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    }
}

/// Return the first `n` characters of `input`, or all of it if shorter.
pub fn take_first_n_characters(input: &str, n: usize) -> &str {
    match input.char_indices().nth(n) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

fn compose(first: &str, last: &str, total_length: usize, suffix: &str, reverse_order: bool) -> String {
    let (lead, tail) = if reverse_order {
        (last, first)
    } else {
        (first, last)
    };

    let part1 = take_first_n_characters(lead, (total_length / 2).max(MIN_PART_LENGTH));
    let part2 = take_first_n_characters(
        tail,
        total_length.saturating_sub(part1.chars().count()),
    );

    let mut out = String::with_capacity(part1.len() + part2.len() + suffix.len());
    out.push_str(part1);
    out.push_str(part2);
    out.push_str(suffix);
    out
}

fn suffix_digits(length: usize) -> usize {
    (length / 3).max(1)
}

fn max_suffix_number(digits: usize) -> u64 {
    u32::try_from(digits)
        .ok()
        .and_then(|d| 10u64.checked_pow(d))
        .map_or(u64::MAX, |p| p - 1)
}
