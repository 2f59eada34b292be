/// Where the final outcome of a lookup is written.
pub trait Sink {
    fn success(&self, label: &str);
    fn failure(&self, message: &str);
}

/// Labels to stdout, failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn success(&self, label: &str) {
        println!("{label}");
    }

    fn failure(&self, message: &str) {
        eprintln!("{message}");
    }
}
