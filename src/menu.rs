use crate::*;
use std::ops::Range;

/// Number of rows a menu shows at once.
pub const PAGE_SIZE: usize = 4;

/// A menu entry: what the user sees and what the program gets back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    pub name: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Choice {
            name: name.into(),
            value,
        }
    }
}

/// Build choices named `"<value> <unit>"`.  With `plural` set, the unit gets an `s` for every
/// value other than 0 and 1.
pub fn gen_choices(values: &[u32], unit: &str, plural: bool) -> Vec<Choice<u32>> {
    values
        .iter()
        .map(|&v| {
            let mut name = format!("{} {}", v, unit);
            if plural && v != 1 && v != 0 {
                name.push('s');
            }
            Choice::new(name, v)
        })
        .collect()
}

/// Interactive input the questionnaire needs.
pub trait Prompter {
    /// Show `names` as a menu and return the index picked.
    fn select_index(&mut self, label: &str, names: &[&str]) -> Result<usize>;

    /// Read one line of free text.  `Ok(None)` means end of input.
    fn read_line(&mut self, label: &str) -> Result<Option<String>>;

    /// Tell the user their last answer was rejected.
    fn reject(&mut self, reason: &str) -> Result<()>;
}

/// Present `choices` under `label` and return the chosen value.
pub fn select<T, P>(p: &mut P, label: &str, choices: &[Choice<T>]) -> Result<T>
where
    T: Clone,
    P: Prompter + ?Sized,
{
    if choices.is_empty() {
        bail!("no choices available for {:?}", label)
    }
    let names: Vec<&str> = choices.iter().map(|c| c.name.as_str()).collect();
    let idx = p
        .select_index(label, &names)
        .with_context(|| format!("prompt failed: {}", label))?;
    choices
        .get(idx)
        .map(|c| c.value.clone())
        .ok_or_else(|| anyhow!("selection out of range: {} >= {}", idx, choices.len()))
}

/// Cursor and scroll window of a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectState {
    cursor: usize,
    offset: usize,
    len: usize,
    size: usize,
}

impl SelectState {
    pub fn new(len: usize, size: usize) -> Self {
        SelectState {
            cursor: 0,
            offset: 0,
            len,
            size: size.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.offset {
                self.offset = self.cursor;
            }
        }
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
            if self.cursor >= self.offset + self.size {
                self.offset = self.cursor + 1 - self.size;
            }
        }
    }

    /// Indices of the rows currently on screen.
    pub fn visible(&self) -> Range<usize> {
        self.offset..(self.offset + self.size).min(self.len)
    }
}


#[cfg(test)]
mod tests {
    use super::script::ScriptedPrompter;
    use super::*;

    fn names<T>(c: &[Choice<T>]) -> Vec<&str> {
        c.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn pluralisation() {
        let c = gen_choices(&[0, 1, 2, 8], "chunk", true);
        assert_eq!(names(&c), ["0 chunk", "1 chunk", "2 chunks", "8 chunks"]);
        assert_eq!(c[3].value, 8);

        let c = gen_choices(&[0, 1, 2], "GPU", false);
        assert_eq!(names(&c), ["0 GPU", "1 GPU", "2 GPU"]);
    }

    #[test]
    fn select_returns_value() {
        let c = gen_choices(&[1, 2, 4], "core", true);
        let mut p = ScriptedPrompter::new(&[2], &[]);
        assert_eq!(select(&mut p, "CPU cores", &c).unwrap(), 4);
        assert_eq!(p.asked, ["CPU cores"]);
    }

    #[test]
    fn select_failures() {
        let c = gen_choices(&[1, 2], "core", true);
        let mut p = ScriptedPrompter::new(&[], &[]);
        assert!(select(&mut p, "CPU cores", &c).is_err());

        let mut p = ScriptedPrompter::new(&[5], &[]);
        assert!(select(&mut p, "CPU cores", &c).is_err());

        let empty: Vec<Choice<u32>> = vec![];
        let mut p = ScriptedPrompter::new(&[0], &[]);
        assert!(select(&mut p, "CPU cores", &empty).is_err());
        assert!(p.asked.is_empty());
    }

    #[test]
    fn select_state_scrolls() {
        let mut s = SelectState::new(6, PAGE_SIZE);
        assert_eq!(s.visible(), 0..4);
        s.up();
        assert_eq!(s.cursor(), 0);
        for _ in 0..4 {
            s.down();
        }
        assert_eq!(s.cursor(), 4);
        assert_eq!(s.visible(), 1..5);
        s.down();
        s.down();
        assert_eq!(s.cursor(), 5);
        assert_eq!(s.visible(), 2..6);
        for _ in 0..3 {
            s.up();
        }
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.visible(), 2..6);
        s.up();
        assert_eq!(s.visible(), 1..5);
    }

    #[test]
    fn select_state_short_list() {
        let mut s = SelectState::new(3, PAGE_SIZE);
        assert_eq!(s.visible(), 0..3);
        s.down();
        s.down();
        s.down();
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.visible(), 0..3);
    }
}
