//! minits_emitter: AST to text output.
//!
//! Converts a parsed [`Program`] back into untyped source text: type
//! annotations are dropped, blocks are re-indented structurally rather
//! than from source whitespace, and binary expressions are printed
//! without inserting parentheses (the tree shape already encodes the
//! evaluation order).

use minits_ast::node::*;
use minits_diagnostics::CodegenError;

/// Indentation prefix per block level.
const INDENT: &str = "  ";

/// The code generator converts an AST into formatted output text.
///
/// Output is a pure function of the tree: the buffer and indentation
/// counter are reset on every [`generate`](CodeGenerator::generate) call,
/// so no state leaks between runs.
#[derive(Default)]
pub struct CodeGenerator {
    output: String,
    indent_level: u32,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole program. Top-level statements are separated by a
    /// blank line.
    pub fn generate(&mut self, program: &Program) -> Result<String, CodegenError> {
        self.output.clear();
        self.indent_level = 0;

        for (i, stmt) in program.body.iter().enumerate() {
            if i > 0 {
                self.write("\n\n");
            }
            self.emit_statement(stmt)?;
        }

        Ok(std::mem::take(&mut self.output))
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    #[inline]
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    // ========================================================================
    // Statement emission
    // ========================================================================

    fn emit_statement(&mut self, stmt: &Statement) -> Result<(), CodegenError> {
        match stmt {
            Statement::VariableDeclaration(n) => self.emit_variable_declaration(n),
            Statement::FunctionDeclaration(n) => self.emit_function_declaration(n),
            Statement::ReturnStatement(n) => self.emit_return_statement(n),
            Statement::ExpressionStatement(n) => {
                self.write_indent();
                self.emit_expression(&n.expression)?;
                self.write(";");
                Ok(())
            }
        }
    }

    fn emit_variable_declaration(&mut self, decl: &VariableDeclaration) -> Result<(), CodegenError> {
        self.write_indent();
        self.write(decl.kind.text());
        self.write(" ");
        for (i, declarator) in decl.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&declarator.id.name);
            if let Some(init) = &declarator.init {
                self.write(" = ");
                self.emit_expression(init)?;
            }
        }
        self.write(";");
        Ok(())
    }

    /// Emit `function name(params) body`. The output is untyped: both the
    /// parameter annotations and the return type are dropped.
    fn emit_function_declaration(&mut self, func: &FunctionDeclaration) -> Result<(), CodegenError> {
        self.write_indent();
        self.write("function ");
        self.write(&func.id.name);
        self.write("(");
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&param.name.name);
        }
        self.write(") ");
        self.emit_block_statement(&func.body)
    }

    /// Emit a block, indenting its body one level. An empty block renders
    /// as `{}` with no interior newline.
    fn emit_block_statement(&mut self, block: &BlockStatement) -> Result<(), CodegenError> {
        if block.body.is_empty() {
            self.write("{}");
            return Ok(());
        }

        self.write("{\n");
        self.indent_level += 1;
        for (i, stmt) in block.body.iter().enumerate() {
            if i > 0 {
                self.write("\n");
            }
            self.emit_statement(stmt)?;
        }
        self.indent_level -= 1;
        self.write("\n");
        self.write_indent();
        self.write("}");
        Ok(())
    }

    fn emit_return_statement(&mut self, stmt: &ReturnStatement) -> Result<(), CodegenError> {
        self.write_indent();
        self.write("return");
        if let Some(argument) = &stmt.argument {
            self.write(" ");
            self.emit_expression(argument)?;
        }
        self.write(";");
        Ok(())
    }

    // ========================================================================
    // Expression emission
    // ========================================================================

    fn emit_expression(&mut self, expr: &Expression) -> Result<(), CodegenError> {
        match expr {
            Expression::Binary(n) => {
                self.emit_expression(&n.left)?;
                self.write(" ");
                self.write(n.operator.text());
                self.write(" ");
                self.emit_expression(&n.right)
            }
            Expression::Identifier(n) => {
                self.write(&n.name);
                Ok(())
            }
            Expression::NumericLiteral(n) => {
                self.write(&n.value.to_string());
                Ok(())
            }
            Expression::StringLiteral(n) => {
                // Re-emitted verbatim, without re-escaping.
                self.write("\"");
                self.write(&n.value);
                self.write("\"");
                Ok(())
            }
            Expression::Call(n) => {
                self.emit_expression(&n.callee)?;
                self.write("(");
                for (i, argument) in n.arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expression(argument)?;
                }
                self.write(")");
                Ok(())
            }
        }
    }
}
