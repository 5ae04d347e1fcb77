/// Line-oriented sink a greeter writes through.
pub trait Output: Send + Sync {
    /// Writes `line` followed by a single `\n` as one unit.
    fn write_line(&self, line: &str) -> std::io::Result<()>;
}

impl<O: Output + ?Sized> Output for &O {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        (**self).write_line(line)
    }
}
