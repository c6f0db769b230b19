use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("service returned status {code}")]
    Status { code: u16 },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("can't decode response body: {0}")]
    Decode(#[from] std::io::Error),
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ClientError::Status { code },
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        }
    }
}
