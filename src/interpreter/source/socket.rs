use std::{
    io::{BufReader, ErrorKind, Read},
    net::{Ipv4Addr, Shutdown, TcpListener, TcpStream},
};

use tracing::{debug, warn};

use crate::{
    error::SourceError,
    interpreter::source::{END_OF_INPUT, Position, Source, SourceChar},
};

/// A source reading bytes from the first connection accepted on a port.
///
/// Each byte is read with a blocking call and mapped to one character. The
/// end of the stream, or a closed connection, reads as end of input.
#[derive(Debug)]
pub struct SocketSource {
    reader:  Option<BufReader<TcpStream>>,
    current: SourceChar,
}

impl SocketSource {
    /// Listens on `port` and blocks until exactly one client connects.
    ///
    /// # Errors
    /// Returns [`SourceError::Bind`] if the port cannot be bound, and the
    /// errors of [`SocketSource::accept`] otherwise.
    pub fn listen(port: u16) -> Result<Self, SourceError> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, port)).map_err(|source| {
                                                                         SourceError::Bind { port,
                                                                                             source }
                                                                     })?;
        debug!(target: "matlang::source", port, "Waiting for a connection");
        Self::accept(&listener)
    }

    /// Accepts one connection on an already bound listener.
    ///
    /// # Errors
    /// Returns [`SourceError::Accept`] if no connection can be accepted, and
    /// [`SourceError::Read`] if the first byte cannot be read.
    pub fn accept(listener: &TcpListener) -> Result<Self, SourceError> {
        let (stream, peer) = listener.accept()
                                     .map_err(|source| SourceError::Accept { source })?;
        debug!(target: "matlang::source", %peer, "Accepted connection");

        let mut source = Self { reader:  Some(BufReader::new(stream)),
                                current: SourceChar { character: END_OF_INPUT,
                                                      position:  Position::start(), }, };
        source.current.character = source.read_character(Position::start())?;

        Ok(source)
    }

    fn read_character(&mut self, position: Position) -> Result<char, SourceError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(END_OF_INPUT);
        };

        let mut byte = [0_u8; 1];
        loop {
            match reader.read(&mut byte) {
                Ok(0) => return Ok(END_OF_INPUT),
                Ok(_) => return Ok(char::from(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {},
                Err(source) => return Err(SourceError::Read { position, source }),
            }
        }
    }
}

impl Source for SocketSource {
    fn current(&self) -> SourceChar {
        self.current
    }

    fn advance(&mut self) -> Result<SourceChar, SourceError> {
        if self.current.is_end() {
            return Ok(self.current);
        }

        let position = self.current.following_position();
        let character = self.read_character(position)?;
        self.current = SourceChar { character, position };

        Ok(self.current)
    }

    fn close(&mut self) {
        if let Some(reader) = self.reader.take() {
            if let Err(e) = reader.get_ref().shutdown(Shutdown::Both) {
                warn!(target: "matlang::source", error = %e, "Failed to shut down connection");
            }
        }
        self.current.character = END_OF_INPUT;
    }
}
