//! Reference corpus of common English words.
//!
//! The corpus is a remote text file of `word<TAB>count` lines sorted by
//! descending count. It is only ever read lazily: a [`LineStream`] pulls
//! lines on demand, so asking for the first thousand words of a
//! multi-megabyte corpus reads little more than a thousand lines.

use crate::error::{Result, WordFreqError};
use log::{debug, info, warn};
use std::io::{self, BufRead, BufReader, Read};

pub const PLAIN_TEXT: &str = "text/plain";
pub const DEFAULT_CORPUS_URL: &str = "http://norvig.com/ngrams/count_1w.txt";

/// What a transport hands back before any of the body is read.
pub struct CorpusResponse<R> {
    /// Raw `Content-Type` header, parameters included.
    pub content_type: Option<String>,
    pub body: R,
}

pub trait CorpusTransport {
    type Body: BufRead;

    fn fetch(&self, url: &str) -> Result<CorpusResponse<Self::Body>>;
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusTransport for HttpTransport {
    type Body = BufReader<Box<dyn Read + Send + Sync + 'static>>;

    fn fetch(&self, url: &str) -> Result<CorpusResponse<Self::Body>> {
        info!("fetching corpus from {url}");
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| WordFreqError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        let content_type = response.header("content-type").map(str::to_string);
        Ok(CorpusResponse {
            content_type,
            body: BufReader::new(response.into_reader()),
        })
    }
}

/// Content type suggested by the URL's file name, ignoring query and fragment.
pub fn guess_content_type(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// Media type of a `Content-Type` header, without parameters.
pub fn media_type(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Open the corpus at `url`.
///
/// Both the type guessed from the URL and the type the server reports must
/// be `text/plain`; otherwise the body is dropped unread and a
/// [`WordFreqError::Security`] is returned. A URL that fails the guess is
/// rejected before any request is made.
pub fn open<T: CorpusTransport>(transport: &T, url: &str) -> Result<LineStream<T::Body>> {
    let guessed = guess_content_type(url).unwrap_or_else(|| "unknown".to_string());
    if guessed != PLAIN_TEXT {
        return Err(WordFreqError::Security {
            url: url.to_string(),
            guessed,
            reported: "nothing (not requested)".to_string(),
        });
    }

    let response = transport.fetch(url)?;
    let reported = response
        .content_type
        .as_deref()
        .map(media_type)
        .unwrap_or_else(|| "no content type".to_string());
    if reported != PLAIN_TEXT {
        return Err(WordFreqError::Security {
            url: url.to_string(),
            guessed,
            reported,
        });
    }

    Ok(LineStream::new(response.body))
}

/// Pull-based line iterator that remembers how many lines it has yielded.
///
/// Lines come back as raw bytes without their line ending; decoding is left
/// to the caller so one badly encoded line does not end the stream.
pub struct LineStream<R> {
    reader: R,
    line_index: usize,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        LineStream {
            reader,
            line_index: 0,
        }
    }

    /// 0-based index of the next line to be read.
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

impl<R: BufRead> Iterator for LineStream<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with(b"\n") {
                    line.pop();
                    if line.ends_with(b"\r") {
                        line.pop();
                    }
                }
                self.line_index += 1;
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonWord {
    pub word: String,
    /// Reference count, present only when requested.
    pub frequency: Option<u64>,
}

/// Read lines `start..start + count` of the corpus.
///
/// Lines before `start` are skipped; if the stream is already past `start`
/// the window begins at the current line. Reading stops as soon as `count`
/// lines have been taken. Single-letter words other than "a" and "i" are
/// dropped, as are malformed lines, so the result may hold fewer than
/// `count` words.
pub fn fetch_window<R: BufRead>(
    stream: &mut LineStream<R>,
    start: usize,
    count: usize,
    include_frequency: bool,
) -> Result<Vec<CommonWord>> {
    while stream.line_index() < start {
        match stream.next() {
            Some(line) => {
                line?;
            }
            None => return Ok(Vec::new()),
        }
    }

    let first = stream.line_index();
    let mut window = Vec::with_capacity(count);
    for line in stream.by_ref().take(count) {
        if let Some(entry) = parse_line(&line?, include_frequency) {
            window.push(entry);
        }
    }
    debug!(
        "corpus lines {first}..{}: kept {} words",
        stream.line_index(),
        window.len()
    );
    Ok(window)
}

/// Like [`fetch_window`] without frequencies, returning just the words.
pub fn fetch_words<R: BufRead>(
    stream: &mut LineStream<R>,
    start: usize,
    count: usize,
) -> Result<Vec<String>> {
    Ok(fetch_window(stream, start, count, false)?
        .into_iter()
        .map(|entry| entry.word)
        .collect())
}

fn parse_line(raw: &[u8], include_frequency: bool) -> Option<CommonWord> {
    let line = match std::str::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => {
            let lossy = String::from_utf8_lossy(raw);
            warn!("skipping corpus line that is not UTF-8 ({e}): {lossy:?}");
            return None;
        }
    };
    let Some((word, frequency_text)) = line.split_once('\t') else {
        warn!("skipping corpus line without a tab: {line:?}");
        return None;
    };

    let word = word.to_lowercase();
    if word.chars().count() == 1 && word != "i" && word != "a" {
        return None;
    }

    let frequency = if include_frequency {
        match frequency_text.trim().parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("skipping corpus line with bad count {frequency_text:?}: {e}");
                return None;
            }
        }
    } else {
        None
    };

    Some(CommonWord { word, frequency })
}

/// Successive windows of `page_size` lines covering the first `limit`
/// lines of the stream from its current line.
pub struct CommonWordPages<'a, R> {
    stream: &'a mut LineStream<R>,
    page_size: usize,
    remaining: usize,
}

impl<'a, R: BufRead> CommonWordPages<'a, R> {
    pub fn new(stream: &'a mut LineStream<R>, page_size: usize, limit: usize) -> Self {
        CommonWordPages {
            stream,
            page_size,
            remaining: limit,
        }
    }
}

impl<R: BufRead> Iterator for CommonWordPages<'_, R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let wanted = self.page_size.min(self.remaining);
        if wanted == 0 {
            return None;
        }

        let before = self.stream.line_index();
        let page = match fetch_words(self.stream, before, wanted) {
            Ok(page) => page,
            Err(e) => {
                self.remaining = 0;
                return Some(Err(e));
            }
        };

        let consumed = self.stream.line_index() - before;
        if consumed == 0 {
            self.remaining = 0;
            return None;
        }
        // a short page means the corpus ran out
        self.remaining = if consumed < wanted {
            0
        } else {
            self.remaining - consumed
        };
        Some(Ok(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;

    const CORPUS: &str = "the\t100\nof\t90\nand\t80\nx\t75\na\t70\nIn\t60\nno-tab-here\nis\t50\n";

    struct FakeTransport {
        content_type: Option<&'static str>,
        body: &'static str,
        fetched: Cell<bool>,
    }

    impl FakeTransport {
        fn new(content_type: Option<&'static str>, body: &'static str) -> Self {
            FakeTransport {
                content_type,
                body,
                fetched: Cell::new(false),
            }
        }
    }

    impl CorpusTransport for FakeTransport {
        type Body = Cursor<Vec<u8>>;

        fn fetch(&self, _url: &str) -> Result<CorpusResponse<Self::Body>> {
            self.fetched.set(true);
            Ok(CorpusResponse {
                content_type: self.content_type.map(str::to_string),
                body: Cursor::new(self.body.as_bytes().to_vec()),
            })
        }
    }

    // Endless corpus that produces one line per fill and counts them.
    struct Endless {
        produced: Rc<Cell<usize>>,
        line: Vec<u8>,
        pos: usize,
    }

    impl Endless {
        fn new(produced: Rc<Cell<usize>>) -> Self {
            Endless {
                produced,
                line: Vec::new(),
                pos: 0,
            }
        }
    }

    impl Read for Endless {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let available = self.fill_buf()?;
            let n = available.len().min(buf.len());
            buf[..n].copy_from_slice(&available[..n]);
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for Endless {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.pos == self.line.len() {
                let n = self.produced.get();
                self.line = format!("word{n}\t{}\n", 1_000_000 - n).into_bytes();
                self.pos = 0;
                self.produced.set(n + 1);
            }
            Ok(&self.line[self.pos..])
        }

        fn consume(&mut self, amt: usize) {
            self.pos += amt;
        }
    }

    // Body that records whether anything tried to read it.
    struct Tripwire(Rc<Cell<bool>>);

    impl Read for Tripwire {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            self.0.set(true);
            Ok(0)
        }
    }

    impl BufRead for Tripwire {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.0.set(true);
            Ok(&[])
        }

        fn consume(&mut self, _amt: usize) {}
    }

    struct TripwireTransport(Rc<Cell<bool>>);

    impl CorpusTransport for TripwireTransport {
        type Body = Tripwire;

        fn fetch(&self, _url: &str) -> Result<CorpusResponse<Self::Body>> {
            Ok(CorpusResponse {
                content_type: Some("text/html; charset=utf-8".to_string()),
                body: Tripwire(self.0.clone()),
            })
        }
    }

    fn stream(body: &str) -> LineStream<Cursor<Vec<u8>>> {
        LineStream::new(Cursor::new(body.as_bytes().to_vec()))
    }

    #[test]
    fn content_type_guess() {
        assert_eq!(
            guess_content_type("http://norvig.com/ngrams/count_1w.txt").as_deref(),
            Some(PLAIN_TEXT)
        );
        assert_eq!(
            guess_content_type("https://host/words.txt?rev=2#top").as_deref(),
            Some(PLAIN_TEXT)
        );
        assert_eq!(
            guess_content_type("https://host/index.html").as_deref(),
            Some("text/html")
        );
    }

    #[test]
    fn media_type_drops_parameters() {
        assert_eq!(media_type("text/plain; charset=utf-8"), "text/plain");
        assert_eq!(media_type(" Text/Plain "), "text/plain");
    }

    #[test]
    fn open_accepts_plain_text() {
        let transport = FakeTransport::new(Some("text/plain; charset=utf-8"), CORPUS);
        let stream = open(&transport, "http://example.com/count_1w.txt").unwrap();
        assert_eq!(stream.line_index(), 0);
    }

    #[test]
    fn html_header_is_rejected_without_reading_body() {
        let touched = Rc::new(Cell::new(false));
        let transport = TripwireTransport(touched.clone());
        let result = open(&transport, "http://example.com/words.txt");
        match result {
            Err(WordFreqError::Security { reported, .. }) => assert_eq!(reported, "text/html"),
            _ => panic!("expected a security error"),
        }
        assert!(!touched.get());
    }

    #[test]
    fn non_text_url_is_rejected_before_fetching() {
        let transport = FakeTransport::new(Some("text/plain"), CORPUS);
        let result = open(&transport, "http://example.com/words.html");
        assert!(matches!(result, Err(WordFreqError::Security { .. })));
        assert!(!transport.fetched.get());

        let result = open(&transport, "http://example.com/words");
        assert!(matches!(result, Err(WordFreqError::Security { .. })));
    }

    #[test]
    fn missing_header_is_rejected() {
        let transport = FakeTransport::new(None, CORPUS);
        let result = open(&transport, "http://example.com/words.txt");
        assert!(matches!(result, Err(WordFreqError::Security { .. })));
    }

    #[test]
    fn window_filters_and_lowercases() {
        let mut lines = stream(CORPUS);
        let window = fetch_window(&mut lines, 0, 8, true).unwrap();
        let words: Vec<(&str, Option<u64>)> = window
            .iter()
            .map(|e| (e.word.as_str(), e.frequency))
            .collect();
        assert_eq!(
            words,
            vec![
                ("the", Some(100)),
                ("of", Some(90)),
                ("and", Some(80)),
                ("a", Some(70)),
                ("in", Some(60)),
                ("is", Some(50)),
            ]
        );
    }

    #[test]
    fn window_without_frequency() {
        let mut lines = stream(CORPUS);
        let window = fetch_window(&mut lines, 1, 2, false).unwrap();
        assert_eq!(
            window,
            vec![
                CommonWord { word: "of".into(), frequency: None },
                CommonWord { word: "and".into(), frequency: None },
            ]
        );
        assert_eq!(lines.line_index(), 3);
    }

    #[test]
    fn window_stops_once_filled() {
        let produced = Rc::new(Cell::new(0));
        let mut lines = LineStream::new(Endless::new(produced.clone()));
        let window = fetch_window(&mut lines, 5, 3, true).unwrap();
        let words: Vec<&str> = window.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["word5", "word6", "word7"]);
        assert_eq!(produced.get(), 8);
        assert_eq!(lines.line_index(), 8);
    }

    #[test]
    fn badly_encoded_line_is_skipped() {
        let mut lines = LineStream::new(Cursor::new(b"the\t100\ncaf\xe9\t90\nof\t80\n".to_vec()));
        let words = fetch_words(&mut lines, 0, 3).unwrap();
        assert_eq!(words, vec!["the", "of"]);
        assert_eq!(lines.line_index(), 3);

        let mut lines = LineStream::new(Cursor::new(b"caf\xe9\t90\nthe\t100\r\nof\t80".to_vec()));
        let pages: Vec<Vec<String>> = CommonWordPages::new(&mut lines, 10, 3)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(pages, vec![vec!["the".to_string(), "of".to_string()]]);
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let mut lines = stream(CORPUS);
        assert!(fetch_window(&mut lines, 50, 3, true).unwrap().is_empty());
    }

    #[test]
    fn window_behind_the_stream_starts_at_current_line() {
        let mut lines = stream(CORPUS);
        fetch_words(&mut lines, 0, 2).unwrap();
        assert_eq!(fetch_words(&mut lines, 0, 1).unwrap(), vec!["and"]);
    }

    #[test]
    fn pages_cover_the_limit() {
        let produced = Rc::new(Cell::new(0));
        let mut lines = LineStream::new(Endless::new(produced.clone()));
        let pages: Vec<Vec<String>> = CommonWordPages::new(&mut lines, 4, 10)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(pages.iter().map(Vec::len).collect::<Vec<_>>(), vec![4, 4, 2]);
        assert_eq!(pages[2], vec!["word8", "word9"]);
        assert_eq!(produced.get(), 10);
    }

    #[test]
    fn pages_stop_at_end_of_corpus() {
        let mut lines = stream(CORPUS);
        let pages: Vec<Vec<String>> = CommonWordPages::new(&mut lines, 5, 100)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["the", "of", "and", "a"]);
        assert_eq!(pages[1], vec!["in", "is"]);
    }
}
