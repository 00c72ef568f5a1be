use crate::fetcher::Fetcher;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

enum Reply {
    Response(http::Response<Vec<u8>>),
    Fail(String),
}

/// Answers each GET with the next scripted reply and remembers the urls.
pub(crate) struct MockFetcher {
    replies: Mutex<VecDeque<Reply>>,
    requested: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requested: Mutex::new(vec![]),
        }
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_response(self, status: u16, headers: &[(&str, &str)], body: &[u8]) -> Self {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.push(Reply::Response(builder.body(body.to_vec()).unwrap()))
    }

    pub fn with_json(self, body: &str) -> Self {
        self.with_json_header(body, "content-type", "application/json")
    }

    pub fn with_json_header(self, body: &str, name: &str, value: &str) -> Self {
        self.with_response(200, &[(name, value)], body.as_bytes())
    }

    pub fn with_error(self, message: &str) -> Self {
        self.push(Reply::Fail(message.to_owned()))
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    type Error = io::Error;

    async fn get(&self, url: &str) -> Result<reqwest::Response, Self::Error> {
        self.requested.lock().unwrap().push(url.to_owned());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(response)) => Ok(response.into()),
            Some(Reply::Fail(message)) => Err(io::Error::new(io::ErrorKind::Other, message)),
            None => Err(io::Error::new(io::ErrorKind::Other, "no scripted reply")),
        }
    }
}
