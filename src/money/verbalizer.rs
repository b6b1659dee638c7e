// Amount verbalization
//
// Spells an amount out in Brazilian Portuguese for the "valor por extenso"
// clause of a receipt: "R$ 1.021,05" becomes "Mil e vinte e um reais e
// cinco centavos".
//
// The grammar is irregular in a handful of contained places, all handled as
// explicit overrides before the compositional fallback:
// - 10..=19 are lexical units, never tens + units ("quinze", not "dez e
//   cinco")
// - exactly 100 is "cem"; 101..=199 use "cento"
// - a scale group of exactly 1 is the bare scale word ("mil", never
//   "um mil")

use super::Amount;

const UNITS: [&str; 20] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez", "onze",
    "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];

const TENS: [&str; 10] = [
    "", "dez", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "", "cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos",
    "setecentos", "oitocentos", "novecentos",
];

/// Scale words by power of one thousand: (singular, plural)
const SCALES: [(&str, &str); 4] = [
    ("", ""),
    ("mil", "mil"),
    ("milhão", "milhões"),
    ("bilhão", "bilhões"),
];

/// Spell out a three-digit group, 0..=999. Zero renders as the empty string
/// so callers can skip absent groups.
fn render_group(n: u64) -> String {
    debug_assert!(n <= 999);

    if n == 0 {
        return String::new();
    }
    if n == 100 {
        return "cem".to_string();
    }
    if n <= 19 {
        return UNITS[n as usize].to_string();
    }

    let mut words: Vec<&str> = Vec::with_capacity(5);
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds as usize]);
    }
    if rest > 0 {
        if hundreds > 0 {
            words.push("e");
        }
        if rest <= 19 {
            words.push(UNITS[rest as usize]);
        } else {
            words.push(TENS[(rest / 10) as usize]);
            if rest % 10 > 0 {
                words.push("e");
                words.push(UNITS[(rest % 10) as usize]);
            }
        }
    }

    words.join(" ")
}

/// Spell out a whole number by recursing over powers of one thousand.
///
/// Groups join with "e" when the trailing remainder reads as a single
/// breath (below one hundred, or an exact hundred): "mil e vinte e um" but
/// "mil duzentos e trinta e quatro".
fn render_scaled(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let mut out = String::new();
    let mut remainder_below = n;
    for (scale, &group) in groups.iter().enumerate().rev() {
        remainder_below %= 10u64.pow(3 * scale as u32 + 3);
        if group == 0 {
            continue;
        }
        // Scale index stays within the table for amounts below the
        // magnitude bound
        let Some(&(singular, plural)) = SCALES.get(scale) else {
            continue;
        };

        let word = if scale > 0 && group == 1 {
            singular.to_string()
        } else if scale > 0 {
            format!("{} {}", render_group(group), if group > 1 { plural } else { singular })
        } else {
            render_group(group)
        };

        if !out.is_empty() {
            let trailing = remainder_below;
            if trailing < 100 || trailing % 100 == 0 {
                out.push_str(" e ");
            } else {
                out.push(' ');
            }
        }
        out.push_str(&word);
    }

    out
}

/// Render an amount as its full written-out clause.
///
/// Deterministic and total for every amount the formatter can produce; a
/// zero amount reads "Zero reais", never the empty string.
pub fn verbalize(value: Amount) -> String {
    let units = value.units();
    let cents = value.cents_part();

    let mut out = String::new();

    if units > 0 {
        out.push_str(&render_scaled(units));
        out.push(' ');
        out.push_str(if units == 1 { "real" } else { "reais" });
    }

    if cents > 0 {
        if !out.is_empty() {
            out.push_str(" e ");
        }
        out.push_str(&render_group(cents));
        out.push(' ');
        out.push_str(if cents == 1 { "centavo" } else { "centavos" });
    }

    if out.is_empty() {
        out.push_str("zero reais");
    }

    capitalize(&out)
}

/// Uppercase the first letter; the clause opens the sentence on the receipt.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
