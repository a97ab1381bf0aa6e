use std::{
    env,
    io::{self, BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
    time::Instant,
};

use bookend::{Chunked, DirStorage, Error, Processor, Storage, Value, resolve::Escape};
use tracing_subscriber::EnvFilter;

struct State {
    started: Instant,
    requests: u64,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let root = env::args().nth(1).unwrap_or_else(|| "example/templates".to_owned());
    let addr = env::var("BOOKEND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    let processor = Processor::new(DirStorage::new(root));
    let listener = TcpListener::bind(&addr)?;
    tracing::info!(%addr, root = %processor.storage().root().display(), "listening");

    let mut state = State { started: Instant::now(), requests: 0 };

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(%err, "failed to accept connection");
                continue;
            }
        };

        state.requests += 1;
        if let Err(err) = handle(stream, &processor, &state) {
            tracing::warn!(%err, "request failed");
        }
    }

    Ok(())
}

fn handle(mut stream: TcpStream, processor: &Processor<DirStorage>, state: &State) -> io::Result<()> {
    let path = read_path(&stream)?;
    let name = match path.as_str() {
        "/" => "index.html",
        path => path,
    };

    tracing::info!(%path, "GET");

    if !processor.storage().exists(name) {
        stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")?;
        return Ok(());
    }

    let content_type = if name.ends_with(".html") {
        "text/html; charset=utf-8"
    } else {
        "text/plain; charset=utf-8"
    };

    // head first, body length is unknown until the template is processed
    write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n"
    )?;

    let resolver = |key: &str, out: &mut String| match key {
        "TITLE" => out.push_str("bookend"),
        "POWER" => out.push_str("ON"),
        "PATH" => path.render_into(out),
        "UPTIME" => state.started.elapsed().as_secs().render_into(out),
        "REQUESTS" => state.requests.render_into(out),
        _ => tracing::debug!(key, "unknown key"),
    };

    let mut body = Chunked::new(&mut stream);
    processor.send(name, Escape::new(resolver), &mut body).map_err(Error::into_io)?;
    body.finish().map_err(Error::into_io)?;

    Ok(())
}

/// Read the request line and skip the headers.
fn read_path(stream: &TcpStream) -> io::Result<String> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let mut parts = line.split_whitespace();
    let path = match (parts.next(), parts.next()) {
        (Some("GET"), Some(path)) => path.split('?').next().unwrap_or(path).to_owned(),
        _ => return Err(io::Error::new(io::ErrorKind::InvalidData, "unsupported request")),
    };

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    Ok(path)
}
