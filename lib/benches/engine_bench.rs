#![feature(test)]

extern crate test;

use anagram_engine::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::fs::File;
use std::io;
use std::result::Result;
use test::Bencher;

#[bench]
fn bench_pick_every_starter(b: &mut Bencher) -> Result<(), AnagramError> {
    let index = AnagramIndex::from_reader(io::BufReader::new(File::open("../data/words.txt")?))?;
    let mut session = Session::with_rng(StdRng::seed_from_u64(42));

    b.iter(|| {
        session.reset();
        let mut num_picked = 0;
        while session.pick_good_starter_word(&index).is_ok() {
            num_picked += 1;
        }
        num_picked
    });

    Ok(())
}

#[bench]
fn bench_play_round(b: &mut Bencher) -> Result<(), AnagramError> {
    let index = AnagramIndex::from_reader(io::BufReader::new(File::open("../data/words.txt")?))?;

    b.iter(|| {
        let mut round = Round::new(&index, "tale".into(), 0);
        let guesses: Vec<String> = round.remaining().iter().map(|word| word.to_string()).collect();
        for guess in guesses.iter() {
            round.guess(&index, guess);
        }
        round.give_up()
    });

    Ok(())
}
