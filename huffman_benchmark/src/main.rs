#![doc = include_str!("../README.md")]

use std::{collections::BTreeMap, hint::black_box, time::Instant};

use canonical_huffman::{Coding, Frequencies};
use clap::Parser;
use dyn_size_of::GetSize;

use rand::prelude::*;
use rand::distributions::{WeightedError, WeightedIndex};
use rand_pcg::Pcg64Mcg;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Canonical Huffman coding benchmark.
pub struct Conf {
    /// Length of the test text
    #[arg(short = 'l', long, default_value_t = 1024*1024)]
    pub len: usize,

    /// Number of different symbols in the test text.
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u16).range(1..=256))]
    pub symbols: u16,

    /// The spread of the number of symbols (0 for all about equal).
    /// Each successive symbol occurs 1+SPREAD/1000 times more often than the previous one.
    #[arg(short = 'r', long, default_value_t = 100)]
    pub spread: u32,

    /// Maximum length of a codeword (0 for unlimited)
    #[arg(short = 'm', long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=128))]
    pub max_len: u32,

    /// Time (in seconds) of measuring and warming up the CPU cache before measuring
    #[arg(short='t', long, default_value_t = 5)]
    pub time: u16,

    /// Whether to check the validity
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// Seed for random number generators
    #[arg(short='s', long, default_value_t = 1234)]
    pub seed: u64,
}

impl Conf {
    /// Returns pseudo-random text for testing, which contains each of the symbols at least once (if it is long enough).
    fn text(&self) -> Result<Box<[u8]>, WeightedError> {
        if self.len <= self.symbols as usize { return Ok((0..self.len).map(|v| v as u8).collect()); }

        let spread = 1.0 + self.spread as f64*0.001;
        let weights: Vec<_> = (1..=self.symbols as i32).map(|v| spread.powi(v)).collect();
        let dist = WeightedIndex::new(weights)?;
        let rng = Pcg64Mcg::seed_from_u64(self.seed);

        Ok((0..self.symbols).map(|v| v as u8).chain(
            dist.sample_iter(rng).map(|v| v as u8).take(self.len - self.symbols as usize)
        ).collect())
    }

    /// Returns the average time (in seconds) of calling `f`.
    #[inline(always)] fn measure<R, F>(&self, mut f: F) -> f64
     where F: FnMut() -> R
    {
        let mut iters = 1;
        if self.time > 0 {
            let time = Instant::now();
            loop {
                black_box(f());
                if time.elapsed().as_secs() > self.time as u64 { break; }
                iters += 1;
            }
        }
        let start_moment = Instant::now();
        for _ in 0..iters { black_box(f()); }
        start_moment.elapsed().as_secs_f64() / iters as f64
    }

    fn print_speed(&self, label: &str, sec: f64) {
        let mb = self.len as f64 / (1024 * 1024) as f64;
        println!("{}: {:.0} µs, {:.0} mb/sec", label, sec * 1_000_000.0, mb / sec);
    }
}

fn compare_texts(original: &[u8], decoded: &[u8]) {
    if original.len() == decoded.len() {
        for (i, (e, g)) in original.iter().zip(decoded).enumerate() {
            if e != g {
                println!("FAIL: decoded text at index {} has {}, while the original has {}", i, g, e);
                return;
            }
        }
    } else {
        println!("FAIL: decoded text has length {} different from original {}", decoded.len(), original.len());
        return;
    }
    println!("DONE")
}

fn benchmark(conf: &Conf, text: &[u8]) {
    conf.print_speed("Counting symbol occurrences", conf.measure(||
        BTreeMap::<u8, u32>::with_counted_all(text)
    ));
    let frequencies = BTreeMap::<u8, u32>::with_counted_all(text);
    println!("Alphabet size: {}, entropy: {:.3} bits/symbol", frequencies.number_of_values(), frequencies.entropy());

    let coding = match Coding::from_frequencies(frequencies.clone(), conf.max_len) {
        Ok(coding) => coding,
        Err(e) => { println!("Construction failed: {}", e); return; }
    };
    println!("Construction time [ns]: {:.0}", conf.measure(||
        Coding::from_frequencies(frequencies.clone(), conf.max_len)
    ) * 1_000_000_000.0);
    println!("Coding size [bytes]: {}", coding.size_bytes());
    println!("Longest codeword [bits]: {}", coding.max_code_length());

    let mut bits = Vec::with_capacity(text.len() * coding.max_code_length() as usize);
    if let Err(e) = coding.encode_into(text, &mut bits) {
        println!("Encoding failed: {}", e);
        return;
    }
    println!("Encoded size: {} bits, {:.3} bits/symbol", bits.len(), bits.len() as f64 / text.len() as f64);
    conf.print_speed("Encoding", conf.measure(|| {
        let mut output = Vec::with_capacity(bits.len());
        black_box(coding.encode_into(text, &mut output)).map(|()| output)
    }));

    conf.print_speed("Decoding", conf.measure(|| coding.decode(&bits)));

    if conf.verify {
        print!("Verification... ");
        compare_texts(text, &coding.decode(&bits));
    }
}

fn main() {
    let conf: Conf = Conf::parse();
    match conf.text() {
        Ok(text) => benchmark(&conf, &text),
        Err(e) => println!("Cannot generate the text: {}", e)
    }
}
