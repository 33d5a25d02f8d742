//! Demo data generation.

use super::{ProductDraft, MAX_DESCRIPTION_LENGTH};
use crate::utils::text_processing::truncate_chars;
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use rand::Rng;

/// Generate `count` plausible product drafts for trying the interface out.
///
pub fn demo_products(count: usize) -> Vec<ProductDraft> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let words: Vec<String> = Words(1..4).fake_with_rng(&mut rng);
            let sentence: String = Sentence(4..12).fake_with_rng(&mut rng);
            ProductDraft {
                code: rng.gen_range(1000..100_000),
                name: capitalize(&words.join(" ")),
                description: truncate_chars(&sentence, MAX_DESCRIPTION_LENGTH),
                quantity: rng.gen_range(0..500),
            }
        })
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
