#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("line {line}: {msg}")]
    RunnerError { msg: String, line: usize },
}

pub fn runner_error(msg: impl Into<String>, line: usize) -> anyhow::Error {
    Error::RunnerError {
        msg: msg.into(),
        line,
    }
    .into()
}
