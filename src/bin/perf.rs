use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use structopt::StructOpt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::time;

use rbst::OrderedMap;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "sets", default_value = "0")]
    sets: usize,

    #[structopt(long = "dels", default_value = "0")]
    dels: usize,

    #[structopt(long = "gets", default_value = "0")]
    gets: usize,

    #[structopt(long = "ranks", default_value = "0")]
    ranks: usize,

    #[structopt(long = "log-level", default_value = "info")]
    log_level: Level,
}

fn main() {
    let opts = Opt::from_args();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(opts.log_level)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("unable to set tracing subscriber: {}", err);
    }

    let seed = opts.seed.unwrap_or_else(random);
    info!(seed, "perf");
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: OrderedMap<u64, u64> = OrderedMap::new();

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        let (key, val): (u64, u64) = (rng.gen(), rng.gen());
        index.insert(key, val);
    }
    info!(
        "loaded {} items in {:?}, height {}",
        index.len(),
        start.elapsed(),
        index.height()
    );

    do_incremental(&mut rng, &opts, &mut index);
    do_order_statistics(&mut rng, &opts, &index);

    let start = time::Instant::now();
    let n = index.iter().count();
    info!("iterating {} items took {:?}", n, start.elapsed());

    match index.validate() {
        Ok(()) => info!("validated {} items", index.len()),
        Err(err) => panic!("{}", err),
    }
}

fn do_incremental(rng: &mut SmallRng, opts: &Opt, index: &mut OrderedMap<u64, u64>) {
    let total = opts.sets + opts.dels + opts.gets;
    if total == 0 {
        return;
    }

    let start = time::Instant::now();
    let mut n = total;
    while n > 0 {
        let op = rng.gen::<usize>() % total;

        let key = rng.gen::<u64>();
        if op < opts.sets {
            let val = rng.gen::<u64>();
            index.insert(key, val);
        } else if op < (opts.sets + opts.dels) {
            index.delete(&key);
        } else {
            index.get(&key);
        }
        n -= 1;
    }
    info!("incremental operations {}, took {:?}", total, start.elapsed());
}

fn do_order_statistics(rng: &mut SmallRng, opts: &Opt, index: &OrderedMap<u64, u64>) {
    if opts.ranks == 0 || index.is_empty() {
        return;
    }

    let start = time::Instant::now();
    for _i in 0..opts.ranks {
        let key = rng.gen::<u64>();
        let rank = index.rank(&key);
        if let Ok(found) = index.select(rank) {
            assert!(*found >= key, "select({}) for key {}", rank, key);
        }
        index.floor(&key).ok();
        index.ceiling(&key).ok();
    }
    info!("rank/select operations {}, took {:?}", opts.ranks, start.elapsed());
}
