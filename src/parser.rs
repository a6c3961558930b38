//! Parser for clique cover instance files. The format is line
//! oriented: the vertex count on the first line, the clique bound
//! to test on the second, then one edge per line as two vertex
//! labels. Blank lines are skipped.

use std::io::BufRead;

use crate::{
    get_line_parse, parse_single_line,
    graph::{Graph, VertexIndex},
    Error,
};

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

fn parse_count(input: Input<'_>) -> ParseResult<'_, VertexIndex> {
    use nom::{
        character::complete::{i32, space0},
        sequence::delimited,
    };

    delimited(space0, i32, space0)(input)
}

fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{
        character::complete::{i32, multispace1, space0},
        sequence::{delimited, pair, terminated},
    };

    delimited(space0, pair(terminated(i32, multispace1), i32), space0)(input)
}

pub fn parse_instance<B: BufRead>(input: B) -> Result<Graph, Error> {
    use nom::combinator::eof;

    let mut lines = input.lines();

    get_line_parse!(lines, nodes_count, parse_count);
    get_line_parse!(lines, min_clique_num, parse_count);

    let mut graph = Graph::new(nodes_count, min_clique_num)?;

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        parse_single_line!(edge, parse_edge(&line));
        graph.add_edge(edge.0, edge.1)?;
    }

    Ok(graph)
}

#[cfg(test)]
mod test {
    use std::io::BufReader;

    use super::*;
    use crate::graph::GraphError;

    #[test]
    fn test_parse_count() -> Result<(), Error> {
        let (_, parsed) = parse_count(" 42 ")?;
        assert_eq!(42, parsed);
        Ok(())
    }

    #[test]
    fn test_parse_edge() -> Result<(), Error> {
        let (_, parsed) = parse_edge("3 7")?;
        assert_eq!((3, 7), parsed);
        Ok(())
    }

    #[test]
    fn test_parse_instance() -> Result<(), Error> {
        let instance = "3
2
1 2

2 3
";
        let buf = BufReader::new(instance.as_bytes());
        let parsed = parse_instance(buf)?;

        let mut expected = Graph::new(3, 2)?;
        expected.add_edge(1, 2)?;
        expected.add_edge(2, 3)?;
        assert_eq!(expected, parsed);
        Ok(())
    }

    #[test]
    fn test_parse_instance_dedups_edges() -> Result<(), Error> {
        let instance = "3\n1\n1 2\n2 1\n1 2\n";
        let buf = BufReader::new(instance.as_bytes());
        let parsed = parse_instance(buf)?;
        assert_eq!(1, parsed.number_edges());
        Ok(())
    }

    #[test]
    fn test_parse_instance_rejects_bad_clique_bound() {
        let too_large = BufReader::new("3\n4\n1 2\n".as_bytes());
        assert!(matches!(
            parse_instance(too_large),
            Err(Error::GraphError(GraphError::BadCliqueBound(4)))
        ));

        let zero = BufReader::new("3\n0\n1 2\n".as_bytes());
        assert!(matches!(
            parse_instance(zero),
            Err(Error::GraphError(GraphError::BadCliqueBound(0)))
        ));
    }

    #[test]
    fn test_parse_instance_rejects_loops_and_range() {
        let loop_edge = BufReader::new("3\n2\n2 2\n".as_bytes());
        assert!(matches!(
            parse_instance(loop_edge),
            Err(Error::GraphError(GraphError::LoopEdge(2)))
        ));

        let out_of_range = BufReader::new("3\n2\n1 4\n".as_bytes());
        assert!(matches!(
            parse_instance(out_of_range),
            Err(Error::GraphError(GraphError::VertexOutOfRange(4)))
        ));
    }

    #[test]
    fn test_parse_instance_rejects_garbage() {
        let garbage = BufReader::new("3\n2\n1 two\n".as_bytes());
        assert!(matches!(parse_instance(garbage), Err(Error::ParseError(_))));

        let missing_header = BufReader::new("".as_bytes());
        assert!(parse_instance(missing_header).is_err());
    }
}
