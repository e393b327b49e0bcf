use crate::libs::phylo::error::{ParseErrorKind, TreeError};
use crate::libs::phylo::node::NodeId;
use crate::libs::phylo::tree::Tree;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::map;
use nom::multi::fold_many0;
use nom::sequence::delimited;
use nom::{IResult, Offset, Parser};

/// Characters that terminate an unquoted label.
const RESERVED: &str = "():;,[]";

// ================================================================================================
// Token parsers
// ================================================================================================

// Single quoted labels: 'Homo sapiens'
// Two single quotes inside represent one single quote: 'O''Brien' -> O'Brien
fn quoted_label(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        fold_many0(
            alt((
                map(is_not("'"), String::from),
                map(tag("''"), |_| String::from("'")),
            )),
            String::new,
            |mut acc, piece: String| {
                acc.push_str(&piece);
                acc
            },
        ),
        char('\''),
    )
    .parse(input)
}

// Unquoted labels cannot contain Newick structural characters.
// Surrounding whitespace is insignificant and trimmed.
fn bare_label(input: &str) -> IResult<&str, Option<String>> {
    map(take_while(|c: char| !RESERVED.contains(c)), |s: &str| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
    .parse(input)
}

// Bracketed annotation (`[...]`). The content is preserved verbatim as edge
// metadata, never evaluated.
fn comment_body(input: &str) -> IResult<&str, String> {
    delimited(
        char('['),
        map(take_while(|c| c != ']'), String::from),
        char(']'),
    )
    .parse(input)
}

// The token after ':'. Standard float formats including scientific notation;
// the final validation is `str::parse::<f64>` on the recognized run.
fn length_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || "+-.eE".contains(c)).parse(input)
}

fn skip_ws(input: &str) -> &str {
    match multispace0::<&str, nom::error::Error<&str>>(input) {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

// ================================================================================================
// Intermediate structure
// ================================================================================================

/// Temporary clade built during parsing.
///
/// Parsing produces this nested type; the final `Tree` uses flat node/edge
/// arenas instead. `into_tree` performs the conversion, with each clade's
/// length/support consumed by its parent when the connecting edge is created.
#[derive(Debug, Default)]
struct RawClade {
    name: Option<String>,
    length: Option<f64>,
    support: Option<String>,
    children: Vec<RawClade>,
}

impl RawClade {
    fn is_blank(&self) -> bool {
        self.children.is_empty()
            && self.name.is_none()
            && self.length.is_none()
            && self.support.is_none()
    }

    fn into_tree(mut self, tree: &mut Tree) -> Result<NodeId, TreeError> {
        let root_id = tree.add_node();
        if let Some(node) = tree.get_node_mut(root_id) {
            node.name = self.name.take();
        }

        // Pre-order with an explicit stack; node ids come out in the same
        // order the clades appear in the input
        let mut pending: Vec<(NodeId, RawClade)> = Vec::new();
        for child in self.children.drain(..).rev() {
            pending.push((root_id, child));
        }

        while let Some((parent_id, mut clade)) = pending.pop() {
            let id = tree.add_node();
            if let Some(node) = tree.get_node_mut(id) {
                node.name = clade.name.take();
            }
            let edge_id = tree.link(parent_id, id)?;
            if let Some(edge) = tree.get_edge_mut(edge_id) {
                edge.length = clade.length.take();
                edge.support = clade.support.take();
            }
            for child in clade.children.drain(..).rev() {
                pending.push((id, child));
            }
        }

        Ok(root_id)
    }
}

impl Drop for RawClade {
    // Flatten children before they drop; a ladder tree must not unwind one
    // call frame per nesting level
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut clade) = pending.pop() {
            pending.append(&mut clade.children);
        }
    }
}

// ================================================================================================
// Grammar
// ================================================================================================

// decorations := [label] [comment] [":" length] [comment]
// A comment may appear before or after the length; the later one wins.
fn parse_decorations<'a>(
    input: &'a str,
    rest: &'a str,
) -> Result<(&'a str, Option<String>, Option<f64>, Option<String>), TreeError> {
    let mut rest = skip_ws(rest);

    let name = if rest.starts_with('\'') {
        let at = input.offset(rest);
        let (r, label) = quoted_label(rest)
            .map_err(|_| TreeError::parse(ParseErrorKind::UnterminatedQuotedName, at))?;
        rest = r;
        Some(label)
    } else {
        match bare_label(rest) {
            Ok((r, label)) => {
                rest = r;
                label
            }
            Err(_) => None,
        }
    };

    let (r, mut support) = parse_comment(input, skip_ws(rest))?;
    rest = skip_ws(r);

    let mut length = None;
    if let Some(stripped) = rest.strip_prefix(':') {
        rest = skip_ws(stripped);
        let at = input.offset(rest);
        let (r, token) = length_token(rest)
            .map_err(|_| TreeError::parse(ParseErrorKind::InvalidBranchLength, at))?;
        length = Some(
            token
                .parse::<f64>()
                .map_err(|_| TreeError::parse(ParseErrorKind::InvalidBranchLength, at))?,
        );
        rest = r;
    }

    let (r, late_comment) = parse_comment(input, skip_ws(rest))?;
    rest = r;
    if late_comment.is_some() {
        support = late_comment;
    }

    Ok((rest, name, length, support))
}

fn parse_comment<'a>(
    input: &'a str,
    rest: &'a str,
) -> Result<(&'a str, Option<String>), TreeError> {
    if !rest.starts_with('[') {
        return Ok((rest, None));
    }
    let at = input.offset(rest);
    let (r, body) =
        comment_body(rest).map_err(|_| TreeError::parse(ParseErrorKind::UnexpectedEof, at))?;
    Ok((r, Some(body)))
}

// ================================================================================================
// Entry point
// ================================================================================================

/// Parse a single Newick tree terminated by `;`.
///
/// Token recognition uses nom combinators; nesting is tracked by an explicit
/// stack of open clades, so arbitrarily deep trees parse without exhausting
/// the call stack. The outermost clade becomes the designated root. The
/// parser holds no process-wide state and may be invoked repeatedly on
/// independent inputs.
///
/// # Example
/// ```
/// use nwt::libs::phylo::Tree;
///
/// let tree = Tree::from_newick("(A:0.1,B:0.2)Root;").unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.tip_names(), vec!["A", "B"]);
/// ```
pub fn parse_newick(input: &str) -> Result<Tree, TreeError> {
    let mut rest = skip_ws(input);
    if rest.is_empty() {
        return Err(TreeError::parse(
            ParseErrorKind::UnexpectedEof,
            input.offset(rest),
        ));
    }

    // Children lists of the currently open parentheses
    let mut open: Vec<Vec<RawClade>> = Vec::new();
    let mut current: Option<RawClade> = None;

    let mut clade = loop {
        if current.is_none() {
            rest = skip_ws(rest);
            let start = input.offset(rest);

            if let Some(stripped) = rest.strip_prefix('(') {
                rest = stripped;
                open.push(Vec::new());
                continue;
            }
            if rest.is_empty() {
                return Err(TreeError::parse(ParseErrorKind::UnexpectedEof, start));
            }

            let (r, name, length, support) = parse_decorations(input, rest)?;
            rest = r;
            let leaf = RawClade {
                name,
                length,
                support,
                children: Vec::new(),
            };
            // No implicit unnamed leaves: "(,)" and "()" are rejected here
            if leaf.is_blank() {
                return Err(TreeError::parse(ParseErrorKind::EmptySubtree, start));
            }
            current = Some(leaf);
            continue;
        }

        rest = skip_ws(rest);
        let at = input.offset(rest);
        match rest.bytes().next() {
            Some(b',') if !open.is_empty() => {
                rest = &rest[1..];
                if let (Some(done), Some(frame)) = (current.take(), open.last_mut()) {
                    frame.push(done);
                }
            }
            Some(b')') if !open.is_empty() => {
                rest = &rest[1..];
                let mut children = open.pop().unwrap_or_default();
                if let Some(done) = current.take() {
                    children.push(done);
                }

                let (r, name, length, support) = parse_decorations(input, rest)?;
                rest = r;
                current = Some(RawClade {
                    name,
                    length,
                    support,
                    children,
                });
            }
            Some(b';') if open.is_empty() => {
                if let Some(done) = current.take() {
                    break done;
                }
            }
            None => return Err(TreeError::parse(ParseErrorKind::UnexpectedEof, at)),
            Some(_) => return Err(TreeError::parse(ParseErrorKind::UnbalancedParentheses, at)),
        }
    };

    // Length/support on the outermost clade describe the root branch
    let root_length = clade.length.take();
    let root_support = clade.support.take();

    let mut tree = Tree::new();
    let root_id = clade.into_tree(&mut tree)?;
    tree.set_root(root_id);
    tree.set_root_branch(root_length, root_support);

    Ok(tree)
}
