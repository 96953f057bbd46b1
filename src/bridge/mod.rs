use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::core::error::Error;

/// Wire name of the social-login bridge channel.
pub const CHANNEL_NAME: &str = "flutter_naver_login";

/// Native operations the social-login SDK defines. The bridge accepts
/// them all and answers each with [`Reply::NotImplemented`] until the
/// native integration exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    LogIn,
    LogOut,
    LogOutAndDeleteToken,
    GetCurrentAccount,
    GetCurrentAccessToken,
}

impl Method {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "logIn" => Some(Self::LogIn),
            "logOut" => Some(Self::LogOut),
            "logoutAndDeleteToken" => Some(Self::LogOutAndDeleteToken),
            "getCurrentAccount" => Some(Self::GetCurrentAccount),
            "getCurrentAccessToken" => Some(Self::GetCurrentAccessToken),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    NotImplemented,
}

#[derive(Debug)]
struct Call {
    method: String,
    arguments: Value,
    tx: oneshot::Sender<Reply>,
}

#[derive(Debug)]
struct Handler {
    rx: mpsc::Receiver<Call>,
}

impl Handler {
    async fn run(mut self) {
        while let Some(call) = self.rx.recv().await {
            tracing::debug!("bridge call: {}", call.method);

            let reply = match Method::parse(&call.method) {
                Some(method) => Self::dispatch(method, call.arguments),
                None => Reply::NotImplemented,
            };

            if call.tx.send(reply).is_err() {
                tracing::error!("bridge caller dropped before reply: {}", call.method);
            }
        }
    }

    // TODO: wire these to the Naver SDK once the native integration lands
    fn dispatch(method: Method, _arguments: Value) -> Reply {
        match method {
            Method::LogIn
            | Method::LogOut
            | Method::LogOutAndDeleteToken
            | Method::GetCurrentAccount
            | Method::GetCurrentAccessToken => Reply::NotImplemented,
        }
    }
}

/// Handle to the named bridge channel. Creating one spawns the handler
/// task; it stops once every handle is dropped.
#[derive(Clone, Debug)]
pub struct Channel {
    name: &'static str,
    tx: mpsc::Sender<Call>,
}

impl Channel {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(32);

        let handler = Handler { rx };

        tokio::spawn(async move {
            handler.run().await;
        });

        Self {
            name: CHANNEL_NAME,
            tx,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Send one method call over the channel and wait for its reply.
    ///
    /// # Errors
    /// Returns an error if the handler task is gone.
    pub async fn invoke(&self, method: &str, arguments: Value) -> Result<Reply, Error> {
        let (tx, rx) = oneshot::channel();

        let call = Call {
            method: method.to_string(),
            arguments,
            tx,
        };

        if let Err(e) = self.tx.send(call).await {
            tracing::error!("{}", e);
            return Err(Error::Internal);
        }

        match rx.await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::error!("{}", e);
                Err(Error::Internal)
            }
        }
    }
}
