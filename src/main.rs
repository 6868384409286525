//! Runs one producer and one consumer against a shared bounded buffer until
//! the process is killed.

use std::io::Write;
use std::sync::Arc;

use condq::{BoundedBuffer, Consumer, Producer};
use env_logger::Target;
use log::LevelFilter;

fn main() {
    // Bare-message format on stdout; the buffer's trace is the program output.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let buffer = Arc::new(BoundedBuffer::new());
    let producer = Producer::new(Arc::clone(&buffer)).spawn();
    let consumer = Consumer::new(Arc::clone(&buffer)).spawn();

    // Neither loop terminates; park here until the process is interrupted.
    let _ = producer.join();
    let _ = consumer.join();
}
