//! E-mail address prefix scanning.
//!
//! Grammar: `local "@" label ("." label)+`. The local part is one or more of letters,
//! digits and `. _ - +`. A label is letters, digits and `-`, and may not start or end
//! with `-`. At least two labels are required.

use log::trace;

use crate::core::table::is_alphanumeric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading the local part.
    Local,
    /// After `@` or a `.`, expecting the first byte of a label.
    LabelStart,
    /// Inside a label.
    Label,
}

#[inline]
fn is_local_char(b: u8) -> bool {
    is_alphanumeric(b) || matches!(b, b'.' | b'_' | b'-' | b'+')
}

/// `Ok(len)` for a match. Otherwise `Err(skip)`: no address starts at any offset in `1..skip`.
pub(crate) fn scan(bytes: &[u8]) -> Result<usize, usize> {
    let mut state = State::Local;
    let mut at = 0;
    let mut labels = 0;
    // End of the last complete label.
    let mut end = 0;
    // One past the last alphanumeric of the current label.
    let mut label_end = 0;

    for (i, &b) in bytes.iter().enumerate() {
        state = match state {
            State::Local if is_local_char(b) => State::Local,
            State::Local if b == b'@' && i > 0 => {
                at = i;
                State::LabelStart
            }
            State::Local => return Err(i.max(1)),
            State::LabelStart if is_alphanumeric(b) => {
                label_end = i + 1;
                State::Label
            }
            State::LabelStart => break,
            State::Label if is_alphanumeric(b) => {
                label_end = i + 1;
                State::Label
            }
            State::Label if b == b'-' => State::Label,
            State::Label => {
                labels += 1;
                end = label_end;
                // a label ending in '-' is cut back and closes the domain
                if b == b'.' && label_end == i {
                    State::LabelStart
                } else {
                    break;
                }
            }
        };
    }

    match state {
        State::Local => return Err(bytes.len()),
        State::Label if label_end > end => {
            labels += 1;
            end = label_end;
        }
        _ => {}
    }

    if labels < 2 {
        // every later start inside the local part sees the same domain
        return Err(at);
    }
    Ok(end)
}

/// Does `text` start with an e-mail address?
///
/// Returns the byte length of the address at offset 0, so `&text[..len]` is the address,
/// or `None` when there is no local part, no `@`, or no domain with at least one dot.
///
/// # Examples
///
/// ```
/// use uricode::email_prefix_length;
///
/// let text = "my.e-mail@www.example-domain.com with garbage";
/// assert_eq!(email_prefix_length(text), Some(32));
/// assert_eq!(email_prefix_length("user@localhost"), None);
/// ```
pub fn email_prefix_length(text: impl AsRef<[u8]>) -> Option<usize> {
    let bytes = text.as_ref();
    let result = scan(bytes).ok();
    trace!("email prefix scan over {} bytes: {:?}", bytes.len(), result);
    result
}
