// src/data/lines.rs
//! Leitura de linhas aceitando `\n`, `\r\n` e `\r` isolado como fim de linha

use std::io::{self, BufRead};

/// Iterador de linhas sobre um `BufRead`.
///
/// O terminador não entra na linha. Bytes que não são UTF-8 válido são
/// decodificados com perda.
pub struct CorpusLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> CorpusLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for CorpusLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match read_line_any_ending(&mut self.reader, &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Lê até o próximo fim de linha; retorna os bytes consumidos (0 = EOF)
fn read_line_any_ending<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let mut consumed = 0;

    loop {
        let (ending, used) = {
            let available = match reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(consumed);
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    buf.extend_from_slice(&available[..i]);
                    (Some(available[i]), i + 1)
                }
                None => {
                    buf.extend_from_slice(available);
                    (None, available.len())
                }
            }
        };

        reader.consume(used);
        consumed += used;

        match ending {
            Some(b'\r') => {
                // `\r\n` conta como um único fim de linha
                if reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                    consumed += 1;
                }
                return Ok(consumed);
            }
            Some(_) => return Ok(consumed),
            None => {}
        }
    }
}
