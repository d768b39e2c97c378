use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first). Subscripts of identifiers are visited too.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let children = expr.children();
            match children.last() {
                Some(last) if !self.is_last_visited(last) => {
                    for child in children.iter().rev() {
                        self.stack.push(child);
                    }
                },
                _ => return self.visit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // 2x + -(y / a_1)
        let expr = Expr::Add(vec![
            Expr::Mul { args: vec![Expr::number("2"), Expr::ident("x")], implicit: true },
            Expr::neg(Expr::div(
                Expr::ident("y"),
                Expr::ident_with_subscript("a", Expr::number("1")),
            )),
        ]);

        let order = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, vec![
            "2",
            "x",
            "2x",
            "y",
            "1",
            "a_1",
            "y / a_1",
            "-(y / a_1)",
            "2x + -(y / a_1)",
        ]);
    }

    #[test]
    fn leaf() {
        let expr = Expr::Pi;
        assert_eq!(expr.post_order_iter().count(), 1);
    }
}
