// End-to-end session scenarios: word bank -> session -> rounds -> exhaustion

use hangman::core::{PLACEHOLDER, render_word};
use hangman::game::{GameConfig, Outcome, Phase, Session};
use hangman::wordbank::WordBank;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn session(bank: &WordBank, max_incorrect: u32, seed: u64) -> Session<'_, StdRng> {
    let config = GameConfig::new(max_incorrect).unwrap();
    Session::new(bank, config, StdRng::seed_from_u64(seed))
}

/// Win the current round by guessing each distinct letter of the word
fn win_round(session: &mut Session<'_, StdRng>) -> Outcome {
    let word = session.state().current_word().unwrap().to_string();
    let letters: BTreeSet<char> = word.chars().collect();
    let mut outcome = Outcome::Ignored;
    for letter in letters {
        outcome = session.submit_guess(&letter.to_string());
    }
    outcome
}

/// Lose the current round by guessing letters absent from the word
fn lose_round(session: &mut Session<'_, StdRng>) -> Outcome {
    let word = session.state().current_word().unwrap().to_string();
    let mut outcome = Outcome::Ignored;
    for letter in ('a'..='z').filter(|c| !word.contains(*c)) {
        outcome = session.submit_guess(&letter.to_string());
        if outcome.ends_round() {
            break;
        }
    }
    outcome
}

#[test]
fn empty_guess_set_renders_all_placeholders() {
    let bank = WordBank::embedded().unwrap();
    for entry in bank.entries() {
        let word = entry.word().text();
        let rendered = render_word(word, &BTreeSet::new());
        let symbols: Vec<char> = rendered.split(' ').flat_map(str::chars).collect();

        assert_eq!(symbols.len(), word.len(), "{word}");
        assert!(symbols.iter().all(|&c| c == PLACEHOLDER), "{word}");
    }
}

#[test]
fn full_guess_set_renders_word() {
    let bank = WordBank::embedded().unwrap();
    for entry in bank.entries() {
        let word = entry.word().text();
        let mut guessed: BTreeSet<char> = word.chars().collect();
        assert_eq!(render_word(word, &guessed).replace(' ', ""), word);

        guessed.extend(['q', 'z']);
        assert_eq!(render_word(word, &guessed).replace(' ', ""), word);
    }
}

#[test]
fn repeated_guess_never_changes_incorrect_count() {
    let bank = WordBank::from_pairs(&[("cat", "feline pet")]).unwrap();
    let mut session = session(&bank, 6, 0);

    for letter in ["z", "c", "q"] {
        session.submit_guess(letter);
        let before = session.state().incorrect_count();
        assert_eq!(session.submit_guess(letter), Outcome::Ignored);
        assert_eq!(session.state().incorrect_count(), before);
    }
}

#[test]
fn incorrect_count_is_monotonic_within_round() {
    let bank = WordBank::from_pairs(&[("internet", "global network")]).unwrap();
    let mut session = session(&bank, 6, 0);
    let mut last = 0;

    for letter in ["q", "i", "z", "n", "q", "x", "t", "w"] {
        let outcome = session.submit_guess(letter);
        let now = session.state().incorrect_count();
        assert!(now >= last, "count went from {last} to {now} on {letter}");
        assert!(!outcome.ends_round());
        last = now;
    }
    assert_eq!(last, 4);
}

#[test]
fn incorrect_count_resets_on_round_transition() {
    let bank = WordBank::from_pairs(&[("ox", "farm animal"), ("ax", "tool")]).unwrap();
    let mut session = session(&bank, 6, 4);

    session.submit_guess("q");
    assert_eq!(session.state().incorrect_count(), 1);
    assert!(matches!(win_round(&mut session), Outcome::Won { .. }));
    assert_eq!(session.state().incorrect_count(), 0);
    assert!(session.state().guessed_letters().is_empty());
}

#[test]
fn bank_exhausts_after_every_word_is_played() {
    let bank = WordBank::embedded().unwrap();
    let mut session = session(&bank, 6, 2024);

    for round in 0..bank.len() {
        assert_eq!(session.state().phase(), Phase::InRound);
        let outcome = if round % 2 == 0 {
            win_round(&mut session)
        } else {
            lose_round(&mut session)
        };
        assert!(outcome.ends_round(), "round {round} did not end: {outcome:?}");
    }

    assert_eq!(session.state().phase(), Phase::Exhausted);
    assert_eq!(session.state().used_words().len(), bank.len());
    assert_eq!(session.state().current_word(), None);
    assert_eq!(session.submit_guess("a"), Outcome::Exhausted);

    let stats = session.state().stats();
    assert_eq!(stats.rounds_played(), bank.len());
    assert_eq!(stats.rounds_won, bank.len().div_ceil(2));
}

#[test]
fn words_are_not_repeated_within_session() {
    let bank = WordBank::embedded().unwrap();
    let mut session = session(&bank, 6, 99);
    let mut seen = BTreeSet::new();

    while let Some(word) = session.state().current_word() {
        assert!(seen.insert(word.to_string()), "{word} repeated");
        win_round(&mut session);
    }
    assert_eq!(seen.len(), bank.len());
}

#[test]
fn same_seed_same_word_order() {
    let bank = WordBank::embedded().unwrap();
    let mut first = session(&bank, 6, 7);
    let mut second = session(&bank, 6, 7);

    for _ in 0..5 {
        assert_eq!(first.state().current_word(), second.state().current_word());
        win_round(&mut first);
        win_round(&mut second);
    }
}

#[test]
fn single_word_win_scenario() {
    let bank = WordBank::from_pairs(&[("cat", "feline pet")]).unwrap();
    let mut session = session(&bank, 6, 0);
    assert_eq!(session.state().current_word(), Some("cat"));
    assert_eq!(session.state().current_clue(), Some("feline pet"));

    assert_eq!(session.submit_guess("c"), Outcome::Correct);
    assert_eq!(session.state().guessed_letters(), &BTreeSet::from(['c']));
    assert_eq!(session.state().incorrect_count(), 0);

    assert_eq!(session.submit_guess("z"), Outcome::Incorrect);
    assert_eq!(session.state().incorrect_count(), 1);

    assert_eq!(session.submit_guess("a"), Outcome::Correct);

    assert_eq!(
        session.submit_guess("t"),
        Outcome::Won {
            word: "cat".to_string()
        }
    );
    assert_eq!(
        session.state().used_words().iter().collect::<Vec<_>>(),
        vec!["cat"]
    );
    assert_eq!(session.state().phase(), Phase::Exhausted);
    assert_eq!(session.submit_guess("c"), Outcome::Exhausted);
}

#[test]
fn two_miss_loss_scenario() {
    let bank = WordBank::from_pairs(&[("ox", "farm animal"), ("cat", "feline pet")]).unwrap();

    // Find a seed whose first word is "ox"
    let mut session = (0..)
        .map(|seed| session(&bank, 2, seed))
        .find(|s| s.state().current_word() == Some("ox"))
        .unwrap();

    assert_eq!(session.submit_guess("q"), Outcome::Incorrect);
    assert_eq!(session.state().incorrect_count(), 1);
    assert_eq!(
        session.submit_guess("w"),
        Outcome::Lost {
            word: "ox".to_string()
        }
    );

    assert!(session.state().used_words().contains("ox"));
    assert!(session.state().guessed_letters().is_empty());
    assert_eq!(session.state().incorrect_count(), 0);
    assert_eq!(session.state().current_word(), Some("cat"));
    assert_eq!(session.state().phase(), Phase::InRound);
}

#[test]
fn restart_resets_regardless_of_depth() {
    let bank = WordBank::embedded().unwrap();

    for depth in [0, 1, 5, bank.len()] {
        let mut session = session(&bank, 6, depth as u64);
        for _ in 0..depth {
            lose_round(&mut session);
        }
        session.submit_guess("q");

        session.restart();
        assert!(session.state().used_words().is_empty(), "depth {depth}");
        assert_eq!(session.state().incorrect_count(), 0);
        assert!(session.state().guessed_letters().is_empty());
        assert_eq!(session.state().phase(), Phase::InRound);
        assert_eq!(session.state().stats().rounds_played(), 0);
        assert_eq!(session.words_remaining(), bank.len());
    }
}
