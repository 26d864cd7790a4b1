use std::collections::HashMap;

use super::table::KanaTable;

struct Node {
    children: HashMap<u8, Node>,
    kana: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            kana: None,
        }
    }
}

/// Byte trie over a table's romaji tokens, for single-pass longest-match
/// tokenizing.
pub struct KanaTrie {
    root: Node,
}

impl KanaTrie {
    pub fn build(table: &KanaTable) -> Self {
        let mut trie = KanaTrie { root: Node::new() };
        for (romaji, kana) in table.iter() {
            trie.insert(romaji, kana);
        }
        trie
    }

    /// Longest token that prefixes `input`, as (byte length, kana).
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, b) in input.iter().enumerate() {
            match node.children.get(b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(kana) = &node.kana {
                best = Some((i + 1, kana.as_str()));
            }
        }
        best
    }

    fn insert(&mut self, romaji: &str, kana: &str) {
        let mut node = &mut self.root;
        for &b in romaji.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        // First entry wins, matching substitution order.
        if node.kana.is_none() {
            node.kana = Some(kana.to_string());
        }
    }
}
