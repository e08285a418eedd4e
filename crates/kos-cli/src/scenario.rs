//! Line-based GUI scenarios
//!
//! A scenario drives a `Gui` and its render loop the way a script and a
//! player would: widgets are created and read by name, clicks are queued on
//! a headless UI and frames are stepped explicitly.
//!
//! ```text
//! # comment
//! radio pro "Prograde" true in root
//! radio retro "Retrograde" false
//! click retro
//! frame
//! get pro PRESSED
//! ```

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use kos_core::{Delegate, GuiConfig, Value, WidgetId};
use kos_host::{attach, step, Gui, RenderLoop, ScriptedUi};

#[derive(Debug, Clone, PartialEq)]
struct Token {
    text: String,
    quoted: bool,
}

impl Token {
    fn is_word(&self, word: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(word)
    }
}

fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '#' {
            break;
        } else if c == '"' {
            chars.next();
            let mut text = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(c) => text.push(c),
                    None => bail!("unterminated string"),
                }
            }
            tokens.push(Token { text, quoted: true });
        } else {
            let mut text = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                text.push(c);
                chars.next();
            }
            tokens.push(Token { text, quoted: false });
        }
    }
    Ok(tokens)
}

type Transcript = Arc<Mutex<Vec<String>>>;

fn record(transcript: &Transcript, line: String) {
    transcript
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(line);
}

pub struct Scenario {
    gui: Gui,
    render: RenderLoop,
    ui: ScriptedUi,
    names: HashMap<String, WidgetId>,
    frames_per_step: u32,
    transcript: Transcript,
}

impl Scenario {
    pub fn new(config: GuiConfig, frames_per_step: u32) -> Self {
        let (gui, render) = attach(config);
        let mut names = HashMap::new();
        names.insert("root".to_string(), gui.root());
        Scenario {
            gui,
            render,
            ui: ScriptedUi::new(),
            names,
            frames_per_step: frames_per_step.max(1),
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything the scenario has printed so far
    pub fn output(&self) -> Vec<String> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn run(&mut self, source: &str) -> Result<()> {
        for (n, line) in source.lines().enumerate() {
            self.run_line(line)
                .with_context(|| format!("line {}: {}", n + 1, line.trim()))?;
        }
        Ok(())
    }

    pub fn run_line(&mut self, line: &str) -> Result<()> {
        let mut tokens = tokenize(line)?;
        let Some(first) = tokens.first() else {
            return Ok(());
        };
        let command = first.text.to_ascii_lowercase();

        let parent = match tokens.len() {
            len if len >= 3 && tokens[len - 2].is_word("in") => {
                let parent = self.lookup(&tokens[len - 1].text)?;
                tokens.truncate(len - 2);
                parent
            }
            _ => self.gui.root(),
        };
        let args = &tokens[1..];
        debug!("scenario: {} {:?}", command, args);

        match (command.as_str(), args) {
            ("box", [name]) => {
                let id = self.gui.add_box(parent)?;
                self.bind(name, id)
            }
            ("label", [name, text]) => {
                let id = self.gui.add_label(parent, &text.text)?;
                self.bind(name, id)
            }
            ("button", [name, text]) => {
                let id = self.gui.add_button(parent, &text.text)?;
                self.bind(name, id)
            }
            ("checkbox", [name, text, on]) => {
                let on = self.value(on)?.expect_bool()?;
                let id = self.gui.add_checkbox(parent, &text.text, on)?;
                self.bind(name, id)
            }
            ("radio", [name, text, on]) => {
                let on = self.value(on)?.expect_bool()?;
                let id = self.gui.add_radio_button(parent, &text.text, on)?;
                self.bind(name, id)
            }
            ("get", [name, suffix]) => {
                let id = self.lookup(&name.text)?;
                let value = self.gui.get_suffix(id, &suffix.text)?;
                self.print(format!("{}:{} = {}", name.text, suffix.text.to_ascii_uppercase(), value));
                Ok(())
            }
            ("set", [name, suffix, value]) => {
                let id = self.lookup(&name.text)?;
                let value = self.value(value)?;
                self.gui.set_suffix(id, &suffix.text, value)?;
                Ok(())
            }
            ("call", [name, suffix, rest @ ..]) => {
                let id = self.lookup(&name.text)?;
                let args = rest
                    .iter()
                    .map(|token| self.value(token))
                    .collect::<Result<Vec<_>>>()?;
                let result = self.gui.call_suffix(id, &suffix.text, &args)?;
                if result != Value::None {
                    self.print(format!("{}:{} -> {}", name.text, suffix.text.to_ascii_uppercase(), result));
                }
                Ok(())
            }
            ("onpressed", [name, tag]) => {
                let id = self.lookup(&name.text)?;
                let delegate = self.delegate(&tag.text);
                self.gui.set_suffix(id, "ONPRESSED", Value::Delegate(delegate))?;
                Ok(())
            }
            ("click", [name]) => {
                let id = self.lookup(&name.text)?;
                self.ui.click(id);
                Ok(())
            }
            ("frame", []) => self.frames(self.frames_per_step),
            ("frame", [count]) => {
                let count: u32 = count
                    .text
                    .parse()
                    .with_context(|| format!("bad frame count '{}'", count.text))?;
                self.frames(count)
            }
            ("sync", []) => {
                let applied = self.gui.sync()?;
                debug!("sync applied {} messages", applied);
                Ok(())
            }
            ("dump", []) => {
                let mut out = Vec::new();
                self.dump(self.gui.root(), 0, &mut out)?;
                for line in out {
                    self.print(line);
                }
                Ok(())
            }
            (
                "box" | "label" | "button" | "checkbox" | "radio" | "get" | "set" | "call" | "onpressed" | "click"
                | "frame" | "sync" | "dump",
                _,
            ) => bail!("wrong arguments for '{}'", command),
            _ => bail!("unknown command '{}'", command),
        }
    }

    fn frames(&mut self, count: u32) -> Result<()> {
        for _ in 0..count {
            let stats = step(&mut self.gui, &mut self.render, &mut self.ui)?;
            debug!(
                "frame {}: applied {}, deferred {}",
                stats.frame, stats.applied, stats.deferred
            );
        }
        Ok(())
    }

    fn bind(&mut self, name: &Token, id: WidgetId) -> Result<()> {
        if name.quoted || name.text.starts_with('@') {
            bail!("bad widget name '{}'", name.text);
        }
        if self.names.insert(name.text.clone(), id).is_some() {
            bail!("widget name '{}' already used", name.text);
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<WidgetId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("no widget named '{}'", name))
    }

    fn name_of(&self, id: WidgetId) -> String {
        self.names
            .iter()
            .find(|(_, v)| **v == id)
            .map_or_else(|| id.to_string(), |(name, _)| name.clone())
    }

    /// Parse a literal: quoted text is a string, `@name` a widget, then
    /// booleans, `none` and numbers; any other bare word is a string.
    fn value(&self, token: &Token) -> Result<Value> {
        if token.quoted {
            return Ok(Value::from(token.text.as_str()));
        }
        let text = token.text.as_str();
        if let Some(name) = text.strip_prefix('@') {
            return Ok(Value::Widget(self.lookup(name)?));
        }
        if text.eq_ignore_ascii_case("true") {
            return Ok(Value::from(true));
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(Value::from(false));
        }
        if text.eq_ignore_ascii_case("none") {
            return Ok(Value::None);
        }
        if let Ok(n) = text.parse::<i32>() {
            return Ok(Value::Int(n));
        }
        if let Ok(x) = text.parse::<f64>() {
            return Ok(Value::Double(x));
        }
        Ok(Value::from(text))
    }

    fn delegate(&self, tag: &str) -> Delegate {
        let transcript = Arc::clone(&self.transcript);
        let tag = tag.to_string();
        Delegate::new(tag.clone(), move |_| {
            record(&transcript, format!("{} fired", tag));
            Ok(Value::None)
        })
    }

    fn dump(&self, id: WidgetId, depth: usize, out: &mut Vec<String>) -> Result<()> {
        let widget = self.gui.widget(id)?;
        let mut line = format!("{:indent$}{} {}", "", self.name_of(id), widget, indent = depth * 2);
        if let Ok(button) = self.gui.button(id) {
            write!(
                line,
                " pressed={} visible={}",
                button.is_pressed(),
                self.render.tree().is_pressed_visible(id)
            )?;
        }
        out.push(line);
        if let Ok(container) = self.gui.container(id) {
            for child in container.children().to_vec() {
                self.dump(child, depth + 1, out)?;
            }
        }
        Ok(())
    }

    fn print(&self, line: String) {
        record(&self.transcript, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Vec<String> {
        let mut scenario = Scenario::new(GuiConfig::new(), 1);
        scenario.run(source).unwrap();
        scenario.output()
    }

    #[test]
    fn tokenizer_keeps_quoted_text_together() {
        let tokens = tokenize(r#"label title "Fuel left" # trailing"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token { text: "label".into(), quoted: false },
                Token { text: "title".into(), quoted: false },
                Token { text: "Fuel left".into(), quoted: true },
            ]
        );
        assert!(tokenize(r#"label x "open"#).is_err());
    }

    #[test]
    fn push_button_press_is_read_once() {
        let out = run(
            r#"
            button go "Stage"
            click go
            frame
            get go PRESSED
            get go PRESSED
            "#,
        );
        assert_eq!(out, vec!["go:PRESSED = True", "go:PRESSED = False"]);
    }

    #[test]
    fn radio_group_keeps_one_pressed() {
        let out = run(
            r#"
            box modes
            radio pro "Prograde" true in modes
            radio retro "Retrograde" false in modes
            frame
            click retro
            frame
            get pro pressed
            get retro pressed
            "#,
        );
        assert_eq!(out, vec!["pro:PRESSED = False", "retro:PRESSED = True"]);
    }

    #[test]
    fn onpressed_delegate_reports_firing() {
        let out = run(
            r#"
            checkbox lights "Lights" false
            onpressed lights lights_on
            click lights
            frame
            "#,
        );
        assert_eq!(out, vec!["lights_on fired"]);
    }

    #[test]
    fn call_prints_results_and_dump_shows_tree() {
        let out = run(
            r#"
            label status "Orbiting"
            call status HASSUFFIX "text"
            call status TOSTRING
            dump
            "#,
        );
        assert_eq!(
            out,
            vec![
                "status:HASSUFFIX -> True",
                "status:TOSTRING -> LABEL(Orbiting)",
                "root BOX(1 widgets)",
                "  status LABEL(Orbiting)",
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let mut scenario = Scenario::new(GuiConfig::new(), 1);
        let err = scenario
            .run("button go \"Go\"\nset go PRESSED 1\n")
            .unwrap_err();
        assert!(err.to_string().starts_with("line 2:"), "{err}");
        assert!(format!("{err:#}").contains("Boolean"), "{err:#}");
    }

    #[test]
    fn unknown_names_and_commands_fail() {
        let mut scenario = Scenario::new(GuiConfig::new(), 1);
        assert!(scenario.run_line("click nowhere").is_err());
        assert!(scenario.run_line("launch rocket").is_err());
        assert!(scenario.run_line("frame soon").is_err());
        assert!(scenario.run_line("   # only a comment").is_ok());
    }
}
