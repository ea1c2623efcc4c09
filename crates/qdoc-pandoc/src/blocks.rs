//! Block content
//!
//! Block elements are separated from each other by blank lines.

use crate::attr::Attr;
use crate::inlines::Inlines;
use crate::table::GridTable;
use std::fmt;

/// Indentation of definition list bodies
const DEFINITION_INDENT: &str = "    ";

/// A block element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Markdown text written as is
    Raw(String),
    Header(Header),
    Div(Div),
    CodeBlock(CodeBlock),
    DefinitionList(DefinitionList),
    Table(GridTable),
    /// A sequence of blocks
    Many(Blocks),
}

impl Block {
    /// Check whether the block writes out to nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Block::Raw(s) => s.is_empty(),
            Block::Many(blocks) => blocks.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Raw(s) => f.write_str(s),
            Block::Header(header) => header.fmt(f),
            Block::Div(div) => div.fmt(f),
            Block::CodeBlock(code) => code.fmt(f),
            Block::DefinitionList(list) => list.fmt(f),
            Block::Table(table) => f.write_str(table.render().trim_end()),
            Block::Many(blocks) => blocks.fmt(f),
        }
    }
}

impl From<&str> for Block {
    fn from(s: &str) -> Self {
        Block::Raw(s.to_string())
    }
}

impl From<String> for Block {
    fn from(s: String) -> Self {
        Block::Raw(s)
    }
}

impl From<Header> for Block {
    fn from(header: Header) -> Self {
        Block::Header(header)
    }
}

impl From<Div> for Block {
    fn from(div: Div) -> Self {
        Block::Div(div)
    }
}

impl From<CodeBlock> for Block {
    fn from(code: CodeBlock) -> Self {
        Block::CodeBlock(code)
    }
}

impl From<DefinitionList> for Block {
    fn from(list: DefinitionList) -> Self {
        Block::DefinitionList(list)
    }
}

impl From<GridTable> for Block {
    fn from(table: GridTable) -> Self {
        Block::Table(table)
    }
}

impl From<Blocks> for Block {
    fn from(blocks: Blocks) -> Self {
        Block::Many(blocks)
    }
}

/// Blocks separated by blank lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blocks(pub Vec<Block>);

impl Blocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.0.push(block.into());
    }

    /// Append a block if there is one
    pub fn push_opt(&mut self, block: Option<impl Into<Block>>) {
        if let Some(block) = block {
            self.push(block);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Block::is_empty)
    }

    pub fn insert(&mut self, index: usize, block: impl Into<Block>) {
        self.0.insert(index, block.into());
    }
}

impl fmt::Display for Blocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| b.to_string())
            .filter(|s| !s.is_empty())
            .collect();
        f.write_str(&parts.join("\n\n"))
    }
}

impl FromIterator<Block> for Blocks {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        Blocks(iter.into_iter().collect())
    }
}

/// Section header
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub level: usize,
    pub content: Inlines,
    pub attr: Attr,
}

impl Header {
    pub fn new(level: usize, content: impl Into<Inlines>, attr: Attr) -> Self {
        Self {
            level,
            content: content.into(),
            attr,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level.max(1)), self.content)?;
        if !self.attr.is_empty() {
            write!(f, " {{{}}}", self.attr)?;
        }
        Ok(())
    }
}

/// Fenced div
#[derive(Debug, Clone, PartialEq)]
pub struct Div {
    pub content: Box<Block>,
    pub attr: Attr,
}

impl Div {
    pub fn new(content: impl Into<Block>, attr: Attr) -> Self {
        Self {
            content: Box::new(content.into()),
            attr,
        }
    }
}

impl fmt::Display for Div {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attr.is_empty() {
            writeln!(f, ":::")?;
        } else {
            writeln!(f, "::: {{{}}}", self.attr)?;
        }
        writeln!(f, "{}", self.content)?;
        f.write_str(":::")
    }
}

/// Fenced code block
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub code: String,
    pub attr: Attr,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>, attr: Attr) -> Self {
        Self {
            code: code.into(),
            attr,
        }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attr.is_empty() {
            writeln!(f, "```")?;
        } else {
            writeln!(f, "```{{{}}}", self.attr)?;
        }
        writeln!(f, "{}", self.code)?;
        f.write_str("```")
    }
}

/// One term and its definition
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionItem {
    pub term: String,
    pub definition: Block,
}

impl DefinitionItem {
    pub fn new(term: impl Into<String>, definition: impl Into<Block>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Definition list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionList {
    pub items: Vec<DefinitionItem>,
}

impl DefinitionList {
    pub fn new(items: Vec<DefinitionItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for DefinitionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .items
            .iter()
            .map(|item| {
                let definition = item.definition.to_string();
                let body = definition
                    .lines()
                    .enumerate()
                    .map(|(i, line)| {
                        if i == 0 || line.is_empty() {
                            line.to_string()
                        } else {
                            format!("{}{}", DEFINITION_INDENT, line)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{}\n\n:   {}", item.term, body).trim_end().to_string()
            })
            .collect();
        f.write_str(&items.join("\n\n"))
    }
}
