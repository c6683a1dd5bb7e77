//! Built-in name and caption pools for fabricated influencer profiles.

use pulse_core::types::Gender;
use rand::rngs::StdRng;
use rand::Rng;

const MALE_FIRST: [&str; 20] = [
    "Aarav", "Vihaan", "Aditya", "Arjun", "Rohan", "Kabir", "Ishaan", "Dhruv", "Karan", "Nikhil",
    "Siddharth", "Rahul", "Varun", "Aman", "Dev", "Harsh", "Manav", "Pranav", "Sameer", "Yash",
];

const FEMALE_FIRST: [&str; 20] = [
    "Aanya", "Diya", "Ishita", "Kavya", "Meera", "Naina", "Priya", "Riya", "Sanya", "Tara",
    "Ananya", "Avni", "Jhanvi", "Kiara", "Mahika", "Nisha", "Pooja", "Shreya", "Simran", "Zara",
];

const SURNAMES: [&str; 20] = [
    "Sharma", "Verma", "Patel", "Reddy", "Nair", "Iyer", "Mehta", "Kapoor", "Malhotra", "Joshi",
    "Chopra", "Desai", "Kulkarni", "Banerjee", "Chatterjee", "Rao", "Menon", "Singh", "Gupta",
    "Bhatt",
];

const CAPTION_WORDS: [&str; 36] = [
    "morning", "routine", "grind", "fuel", "strength", "wellness", "glow", "daily", "habits",
    "protein", "recovery", "balance", "energy", "mindful", "journey", "progress", "goals",
    "training", "nutrition", "healthy", "lifestyle", "favourite", "honest", "review", "results",
    "week", "challenge", "community", "family", "kids", "simple", "swap", "routine", "tips",
    "discount", "link",
];

/// Gender-conditioned full name. Non-binary profiles draw from the
/// female pool, matching the source dataset's name distribution.
pub fn full_name(rng: &mut StdRng, gender: Gender) -> String {
    let first = match gender {
        Gender::Male => MALE_FIRST[rng.gen_range(0..MALE_FIRST.len())],
        _ => FEMALE_FIRST[rng.gen_range(0..FEMALE_FIRST.len())],
    };
    let last = SURNAMES[rng.gen_range(0..SURNAMES.len())];
    format!("{first} {last}")
}

/// A short caption of roughly twenty words, sentence-cased.
pub fn caption(rng: &mut StdRng) -> String {
    let count = rng.gen_range(14..=22);
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        words.push(CAPTION_WORDS[rng.gen_range(0..CAPTION_WORDS.len())]);
    }
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}
