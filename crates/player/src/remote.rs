//! TCP remote-access service for the desktop build.
//!
//! `connect` binds a non-blocking listener (one join attempt), `address` is
//! the bound socket address, and each `service_step` accepts pending clients
//! and drains whatever they have sent so far. Received bytes are counted.

use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener, TcpStream};

use platform::RemoteAccess;

const READ_CHUNK: usize = 4096;

/// [`RemoteAccess`] backed by a local TCP listener.
pub struct TcpRemote {
    bind: SocketAddr,
    listener: Option<TcpListener>,
    clients: Vec<TcpStream>,
    address: String,
    received: u64,
}

impl TcpRemote {
    pub fn new(bind: SocketAddr) -> Self {
        Self {
            bind,
            listener: None,
            clients: Vec::new(),
            address: String::new(),
            received: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    pub fn clients(&self) -> usize {
        self.clients.len()
    }

    /// Bytes received over the current session.
    pub fn received(&self) -> u64 {
        self.received
    }

    fn open(&mut self) -> io::Result<()> {
        let listener = TcpListener::bind(self.bind)?;
        listener.set_nonblocking(true)?;
        self.address = listener.local_addr()?.to_string();
        self.listener = Some(listener);
        Ok(())
    }

    fn accept_pending(&mut self) {
        let Some(listener) = &self.listener else {
            return;
        };
        loop {
            match listener.accept() {
                Ok((stream, peer)) => {
                    if let Err(err) = stream.set_nonblocking(true) {
                        tracing::warn!(%peer, %err, "dropping upload client");
                        continue;
                    }
                    tracing::info!(%peer, "upload client connected");
                    self.clients.push(stream);
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => break,
                Err(err) => {
                    tracing::warn!(%err, "accept failed");
                    break;
                }
            }
        }
    }

    /// Drain every client; closed or failed clients are dropped.
    fn drain_clients(&mut self) {
        let mut buf = [0u8; READ_CHUNK];
        let mut received = 0u64;
        self.clients.retain_mut(|stream| loop {
            match stream.read(&mut buf) {
                Ok(0) => {
                    tracing::info!("upload client finished");
                    return false;
                }
                Ok(n) => received = received.saturating_add(n as u64),
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => return true,
                Err(err) => {
                    tracing::warn!(%err, "upload client failed");
                    return false;
                }
            }
        });
        self.received = self.received.saturating_add(received);
    }
}

impl RemoteAccess for TcpRemote {
    fn connect(&mut self) -> bool {
        if self.listener.is_some() {
            return true;
        }
        match self.open() {
            Ok(()) => {
                tracing::info!(address = self.address.as_str(), "remote access listening");
                true
            }
            Err(err) => {
                tracing::warn!(bind = %self.bind, %err, "remote access join failed");
                false
            }
        }
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn service_step(&mut self) {
        self.accept_pending();
        self.drain_clients();
    }

    fn disconnect(&mut self) {
        if self.listener.take().is_some() {
            tracing::info!(received = self.received, "remote access closed");
        }
        self.clients.clear();
        self.received = 0;
    }
}
