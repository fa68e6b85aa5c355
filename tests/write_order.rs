mod sink;
use noflush::builder::StopFlush;
use noflush::FlushNow;
use rand::Rng;
use sink::SharedSink;
use std::io::{BufWriter, Write};

/// Write `n` random bytes in random chunks through a stopped `BufWriter`,
/// using every write shape and sprinkling silenced flushes in between,
/// then check the sink received the exact concatenation.
fn test_write_order(n: usize) {
    let sink = SharedSink::new();
    let mut writer =
        BufWriter::with_capacity(64, sink.clone()).stop_flush();
    let mut rng = rand::thread_rng();
    let mut expected = Vec::with_capacity(n);

    while expected.len() < n {
        let len = std::cmp::min(rng.gen_range(1..=64), n - expected.len());
        let mut chunk = vec![0u8; len];
        rng.fill(chunk.as_mut_slice());

        match rng.gen_range(0..3usize) {
            0 => {
                for b in chunk.iter() {
                    assert_eq!(writer.write(&[*b]).unwrap(), 1);
                }
            }
            1 => writer.write_all(chunk.as_slice()).unwrap(),
            _ => {
                // Sub-range shape: the chunk sits in the middle of a
                // larger buffer and only the middle is written.
                let mut padded = vec![0u8; len + 8];
                padded[4..4 + len].copy_from_slice(chunk.as_slice());
                writer.write_all(&padded[4..4 + len]).unwrap();
            }
        }
        expected.extend_from_slice(chunk.as_slice());

        if rng.gen_bool(0.5) {
            writer.flush().unwrap();
        }
    }

    writer.flush_now().unwrap();
    assert_eq!(sink.bytes(), expected);
}

#[test]
fn write_order_test_0() {
    test_write_order(0);
}

#[test]
fn write_order_test_small() {
    test_write_order(100);
}

#[test]
fn write_order_test_large() {
    test_write_order(100000);
}

#[test]
fn silenced_flushes_move_nothing() {
    let sink = SharedSink::new();
    let mut writer =
        BufWriter::with_capacity(4096, sink.clone()).stop_flush();

    writer.write_all(b"AB").unwrap();
    for _ in 0..100 {
        writer.flush().unwrap();
    }

    // The buffer is larger than the payload, so any byte reaching the
    // sink could only come from a real flush.
    assert!(sink.bytes().is_empty());
    assert_eq!(sink.flushes(), 0);

    writer.flush_now().unwrap();
    assert_eq!(sink.bytes(), b"AB");
    assert_eq!(sink.flushes(), 1);
}

#[test]
fn one_sink_flush_per_flush_now() {
    let sink = SharedSink::new();
    let mut writer = BufWriter::new(sink.clone()).stop_flush();
    for i in 1..=5usize {
        writer.flush_now().unwrap();
        assert_eq!(sink.flushes(), i);
    }
}
