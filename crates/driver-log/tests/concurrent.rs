#![allow(unused_crate_dependencies, reason = "These are tests, not the main crate.")]

use std::{array, thread};
use std::sync::{
    Arc, Barrier,
    atomic::{AtomicBool, Ordering},
};

use driver_log::{DeliveryError, LogSink, Logger, MemoryLogger, Record};


/// The number of emitting threads.
const NUM_EMITTERS: usize = 4;
/// The number of messages each emitter sends.
const MESSAGES_PER_EMITTER: usize = 2_000;


/// Accepts each message, and records whether any looked corrupted.
#[derive(Debug, Default)]
struct CheckingLogger {
    inner:   MemoryLogger,
    corrupt: AtomicBool,
}

impl Logger for CheckingLogger {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        let msg = record.message();
        let well_formed = msg
            .strip_prefix("emitter ")
            .and_then(|rest| rest.split_once(" message "))
            .is_some_and(|(emitter, idx)| {
                emitter.parse::<usize>().is_ok_and(|emitter| emitter < NUM_EMITTERS)
                    && idx.parse::<usize>().is_ok_and(|idx| idx < MESSAGES_PER_EMITTER)
            });

        if !well_formed {
            self.corrupt.store(true, Ordering::Relaxed);
        }
        self.inner.output(record)
    }
}

/// - Spawn emitters which log and debug-log numbered messages
/// - Spawn a thread which keeps swapping between two loggers (and no logger)
/// - Spawn a thread which keeps toggling the debug flag
/// - Join everything, and check that no message was delivered twice or mangled
#[test]
fn emit_while_reconfiguring() {
    let sink = Arc::new(LogSink::new());
    let loggers: [Arc<CheckingLogger>; 2] = array::from_fn(|_| Arc::default());
    let done = Arc::new(AtomicBool::new(false));
    let start = Arc::new(Barrier::new(NUM_EMITTERS + 2));

    let emitters: Vec<_> = (0..NUM_EMITTERS)
        .map(|emitter| {
            let sink = Arc::clone(&sink);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                for idx in 0..MESSAGES_PER_EMITTER {
                    if idx % 2 == 0 {
                        sink.logf(format_args!("emitter {emitter} message {idx}"));
                    } else {
                        sink.debug_with(|| format!("emitter {emitter} message {idx}"));
                    }
                }
            })
        })
        .collect();

    let swapper = thread::spawn({
        let sink = Arc::clone(&sink);
        let loggers = loggers.clone();
        let done = Arc::clone(&done);
        let start = Arc::clone(&start);
        move || {
            start.wait();
            let mut round = 0_usize;
            while !done.load(Ordering::Relaxed) {
                match round % 3 {
                    0 => sink.set_logger(Some(loggers[0].clone())),
                    1 => sink.set_logger(Some(loggers[1].clone())),
                    _ => sink.set_logger(None),
                }
                round += 1;
                thread::yield_now();
            }
        }
    });

    let toggler = thread::spawn({
        let sink = Arc::clone(&sink);
        let done = Arc::clone(&done);
        let start = Arc::clone(&start);
        move || {
            start.wait();
            let mut debug = false;
            while !done.load(Ordering::Relaxed) {
                debug = !debug;
                sink.set_debug(debug);
                thread::yield_now();
            }
        }
    });

    for emitter in emitters {
        emitter.join().unwrap();
    }
    done.store(true, Ordering::Relaxed);
    swapper.join().unwrap();
    toggler.join().unwrap();

    let mut delivered: Vec<String> = loggers
        .iter()
        .flat_map(|logger| logger.inner.messages())
        .collect();
    let total = delivered.len();
    delivered.sort_unstable();
    delivered.dedup();

    assert_eq!(delivered.len(), total, "a message was delivered more than once");
    assert!(total <= NUM_EMITTERS * MESSAGES_PER_EMITTER);
    for logger in &loggers {
        assert!(!logger.corrupt.load(Ordering::Relaxed));
    }
}

#[test]
fn settled_state_is_seen_by_every_thread() {
    let sink = Arc::new(LogSink::new());
    let old = Arc::new(MemoryLogger::new());
    let new = Arc::new(MemoryLogger::new());

    sink.set_logger(Some(old.clone()));
    sink.set_logger(Some(new.clone()));
    sink.set_debug(true);

    let handles: Vec<_> = (0..NUM_EMITTERS)
        .map(|emitter| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                sink.log(&[&"emitter ", &emitter]);
                sink.debug(&[&"debug ", &emitter]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(old.is_empty());
    assert_eq!(new.len(), NUM_EMITTERS * 2);
}
