//! Interactive loop: prompt for a question and its answer, submit, repeat.
//!
//! Ends on EOF or when `shutdown` resolves (Ctrl-C in the binary). A
//! shutdown that lands mid-request drops the request along with the loop.

use std::future::Future;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, info};

use crate::api::ChatApi;
use crate::client::ChatClient;
use crate::terminal::TerminalView;
use crate::view::ElementId;

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
  Eof,
  Interrupted,
}

pub async fn run<A, W, E, R, P, S>(
  client: &ChatClient<A, TerminalView<W, E>>,
  input: R,
  prompts: &mut P,
  shutdown: S,
) -> std::io::Result<SessionEnd>
where
  A: ChatApi,
  W: Write + Send,
  E: Write + Send,
  R: AsyncBufRead + Unpin,
  P: Write,
  S: Future<Output = ()>,
{
  let mut lines = input.lines();
  tokio::pin!(shutdown);

  loop {
    tokio::select! {
      step = exchange(client, &mut lines, prompts) => {
        if !step? {
          info!(target: "tutor_chat", "Input closed");
          return Ok(SessionEnd::Eof);
        }
      }
      _ = &mut shutdown => {
        info!(target: "tutor_chat", "Interrupted");
        return Ok(SessionEnd::Interrupted);
      }
    }
  }
}

/// One prompt/submit round; `false` on EOF.
async fn exchange<A, W, E, R, P>(
  client: &ChatClient<A, TerminalView<W, E>>,
  lines: &mut Lines<R>,
  prompts: &mut P,
) -> std::io::Result<bool>
where
  A: ChatApi,
  W: Write + Send,
  E: Write + Send,
  R: AsyncBufRead + Unpin,
  P: Write,
{
  let Some(question) = prompt(lines, prompts, "Question: ").await? else { return Ok(false) };
  let Some(answer) = prompt(lines, prompts, "Answer: ").await? else { return Ok(false) };

  {
    let mut view = client.view();
    view.set_input(ElementId::Question, &question);
    view.set_input(ElementId::Answer, &answer);
  }

  let outcome = client.submit().await;
  debug!(target: "tutor_chat", ?outcome, "Submit finished");
  Ok(true)
}

async fn prompt<R, P>(lines: &mut Lines<R>, prompts: &mut P, label: &str) -> std::io::Result<Option<String>>
where
  R: AsyncBufRead + Unpin,
  P: Write,
{
  write!(prompts, "{}", label)?;
  prompts.flush()?;
  lines.next_line().await
}
