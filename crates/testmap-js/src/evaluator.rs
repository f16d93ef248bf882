//! Declaration-only JavaScript evaluator.
//!
//! Test files are parsed with oxc and their statements are walked as if they
//! were being executed against a mocha-like DSL. Suite callbacks are entered,
//! which is what exposes nesting. Test and hook callbacks are handed to the
//! declaration scope as opaque bodies and are never entered.
//!
//! Only the slice of JavaScript that shapes declarations is understood:
//! DSL calls (optionally awaited or chained), `const`/`let`/`var` bindings
//! and assignments of names, arrays and callbacks, function declarations and
//! calls to them, blocks, `for...of` and `.forEach` over arrays, and `throw`.
//! Anything else is skipped, with a warning when it would have declared
//! something.
//!
//! Bindings hold values computed when their statement runs, so a name never
//! refers back to an expression. Scopes live in an arena: blocks and function
//! activations each get one, `var` goes to the nearest function scope, and
//! callbacks remember the scope they were created in.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, AssignmentTarget, BindingPatternKind, CallExpression,
    Declaration, Expression, ForOfStatement, ForStatementLeft, FormalParameters, Function, Statement,
    VariableDeclaration, VariableDeclarationKind,
};
use oxc_ast_visit::{Visit, walk};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};
use oxc_syntax::number::ToJsString;
use oxc_syntax::operator::{AssignmentOperator, BinaryOperator, UnaryOperator};
use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use testmap_core::{CallSite, Frame, LoadError, SiteResolver, SourceLocation, Suite, Variant, suite_body};

use crate::interface::{Entry, Interface};
use crate::line_index::LineIndex;

/// Nested function activations allowed before evaluation gives up the way
/// an engine would.
const MAX_CALL_DEPTH: usize = 64;

/// The file being evaluated.
pub struct SourceFile<'s> {
    /// Path used to pick the parser dialect and in syntax errors.
    pub path: &'s Path,
    /// File name reported in call-site frames (a path or a `file://` URL).
    pub frame_file: String,
    pub text: &'s str,
}

/// Evaluate the declarations of `source` against `scope`.
pub fn evaluate(
    source: &SourceFile<'_>,
    interface: Interface,
    resolver: &SiteResolver,
    scope: &mut Suite<'_>,
) -> Result<(), LoadError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(source.path).unwrap_or_else(|_| SourceType::mjs());
    let parsed = Parser::new(&allocator, source.text, source_type).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LoadError::Syntax {
            path: source.path.to_path_buf(),
            message: if message.is_empty() {
                "parser gave up".to_string()
            } else {
                message
            },
        });
    }

    let mut evaluator = Evaluator {
        source,
        lines: LineIndex::new(source.text),
        interface,
        resolver,
        scopes: vec![Scope::new(None, true)],
        current: 0,
        depth: 0,
        activations: Vec::new(),
    };
    evaluator.eval_statements(&parsed.program.body, scope)
}

/// A JavaScript value as far as names are concerned.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Value {
    fn into_string(self) -> String {
        match self {
            Value::Str(s) => s,
            Value::Num(n) => n.to_js_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Callback<'a> {
    Function(&'a Function<'a>),
    Arrow(&'a ArrowFunctionExpression<'a>),
}

impl<'a> Callback<'a> {
    fn params(self) -> &'a FormalParameters<'a> {
        match self {
            Callback::Function(function) => &*function.params,
            Callback::Arrow(arrow) => &*arrow.params,
        }
    }
}

/// A callback and the scope it was created in.
#[derive(Clone, Copy)]
struct Closure<'a> {
    callback: Callback<'a>,
    env: usize,
}

#[derive(Clone)]
enum Binding<'a> {
    Value(Value),
    Array(Vec<Binding<'a>>),
    Callback(Closure<'a>),
    /// Declared but not something declarations can use.
    Opaque,
}

struct Scope<'a> {
    bindings: FxHashMap<&'a str, Binding<'a>>,
    parent: Option<usize>,
    /// Function scopes (and the file scope) receive `var` declarations.
    function: bool,
}

impl<'a> Scope<'a> {
    fn new(parent: Option<usize>, function: bool) -> Self {
        Self {
            bindings: FxHashMap::default(),
            parent,
            function,
        }
    }
}

struct Evaluator<'e, 'a> {
    source: &'e SourceFile<'e>,
    lines: LineIndex,
    interface: Interface,
    resolver: &'e SiteResolver,
    /// Every scope created while evaluating the file.
    scopes: Vec<Scope<'a>>,
    current: usize,
    /// Function activations currently on the stack.
    depth: usize,
    /// Frames of the suite callbacks currently being evaluated, outermost first.
    activations: Vec<Frame>,
}

impl<'e, 'a> Evaluator<'e, 'a> {
    fn eval_statements(
        &mut self,
        statements: &'a [Statement<'a>],
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        for statement in statements {
            match statement {
                Statement::FunctionDeclaration(function) => self.hoist(function),
                Statement::ExportNamedDeclaration(export) => {
                    if let Some(Declaration::FunctionDeclaration(function)) = &export.declaration {
                        self.hoist(function);
                    }
                }
                _ => {}
            }
        }

        for statement in statements {
            self.eval_statement(statement, scope)?;
        }
        Ok(())
    }

    fn hoist(&mut self, function: &'a Function<'a>) {
        if let Some(id) = &function.id {
            let closure = Closure {
                callback: Callback::Function(function),
                env: self.current,
            };
            self.bind(id.name.as_str(), Binding::Callback(closure));
        }
    }

    fn eval_statement(
        &mut self,
        statement: &'a Statement<'a>,
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        match statement {
            Statement::ExpressionStatement(stmt) => self.eval_expression(&stmt.expression, scope),
            Statement::BlockStatement(block) => {
                let outer = self.enter_scope(self.current, false);
                let result = self.eval_statements(&block.body, scope);
                self.current = outer;
                result
            }
            Statement::VariableDeclaration(decl) => self.declare_variables(decl, scope),
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::VariableDeclaration(decl)) => self.declare_variables(decl, scope),
                // Exported functions were hoisted with the rest.
                Some(Declaration::FunctionDeclaration(_)) | None => Ok(()),
                Some(_) => {
                    self.warn_if_declares(statement.span(), "export", |finder| finder.visit_statement(statement));
                    Ok(())
                }
            },
            Statement::FunctionDeclaration(_) | Statement::EmptyStatement(_) => Ok(()),
            Statement::ForOfStatement(stmt) => self.eval_for_of(stmt, scope),
            Statement::ThrowStatement(stmt) => Err(LoadError::Thrown {
                location: self.location(stmt.span),
                message: self.thrown_message(&stmt.argument),
            }),
            _ => {
                self.warn_if_declares(statement.span(), "statement", |finder| finder.visit_statement(statement));
                Ok(())
            }
        }
    }

    fn eval_expression(
        &mut self,
        expression: &'a Expression<'a>,
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        match expression {
            Expression::CallExpression(call) => self.eval_call(call, scope),
            Expression::AwaitExpression(expr) => self.eval_expression(&expr.argument, scope),
            Expression::ParenthesizedExpression(expr) => self.eval_expression(&expr.expression, scope),
            Expression::SequenceExpression(seq) => {
                for expr in &seq.expressions {
                    self.eval_expression(expr, scope)?;
                }
                Ok(())
            }
            Expression::AssignmentExpression(assign) if assign.operator == AssignmentOperator::Assign => {
                self.eval_expression(&assign.right, scope)?;
                if let AssignmentTarget::AssignmentTargetIdentifier(ident) = &assign.left {
                    let binding = self.binding_of(&assign.right);
                    self.assign(ident.name.as_str(), binding);
                }
                Ok(())
            }
            // Creating a function runs none of it.
            Expression::FunctionExpression(_) | Expression::ArrowFunctionExpression(_) => Ok(()),
            _ => {
                self.warn_if_declares(expression.span(), "expression", |finder| finder.visit_expression(expression));
                Ok(())
            }
        }
    }

    fn eval_call(&mut self, call: &'a CallExpression<'a>, scope: &mut Suite<'_>) -> Result<(), LoadError> {
        let (callee, modifier) = match &call.callee {
            Expression::Identifier(ident) => (ident.name.as_str(), None),
            Expression::StaticMemberExpression(member) => {
                let property = member.property.name.as_str();
                match &member.object {
                    Expression::ThisExpression(_) => {
                        self.configure(property, call, scope);
                        return Ok(());
                    }
                    // `it('x', fn).timeout(500)` and friends
                    object @ Expression::CallExpression(_) => {
                        self.eval_expression(object, scope)?;
                        return self.skip_call(call);
                    }
                    object if property == "forEach" => match self.elements_of(object) {
                        Some(items) => return self.eval_for_each(call, items, scope),
                        None => return self.skip_call(call),
                    },
                    Expression::Identifier(ident) => (ident.name.as_str(), Some(property)),
                    _ => return self.skip_call(call),
                }
            }
            _ => return self.skip_call(call),
        };

        let Some(entry) = self.interface.classify(callee, modifier) else {
            if modifier.is_none() {
                if let Some(Binding::Callback(closure)) = self.lookup(callee) {
                    let args = self.argument_bindings(call);
                    return self.invoke(closure, &args, call.span, scope);
                }
            }
            trace!(callee, "skipping non-declaration call");
            return self.skip_call(call);
        };
        let site = self.call_site(call.span);

        match entry {
            Entry::Suite(variant) => {
                let name = self.name_argument(call);
                match self.closure_argument(call, 1) {
                    Some(closure) => {
                        let frame = self.frame(call.span);
                        let span = call.span;
                        scope.suite_at(
                            &name,
                            variant,
                            site,
                            suite_body(|inner| self.eval_suite_callback(closure, frame, span, inner)),
                        )
                    }
                    // Pending suites may omit their body.
                    None if variant == Variant::Skip => {
                        scope.suite_at(&name, variant, site, suite_body(|_| Ok(())))
                    }
                    None => Err(LoadError::MissingCallback {
                        location: self.location(call.span),
                        name,
                    }),
                }
            }
            Entry::Test(variant) => {
                let name = self.name_argument(call);
                let body = self.closure_argument(call, 1).map(|_| opaque_body());
                scope.test_at(&name, variant, site, body);
                Ok(())
            }
            Entry::Hook(hook) => {
                let has_body = (0..call.arguments.len()).any(|index| self.closure_argument(call, index).is_some());
                scope.hook_at(hook, site, has_body.then(opaque_body));
                Ok(())
            }
        }
    }

    /// A call that is not evaluated; its callbacks are never entered.
    fn skip_call(&self, call: &'a CallExpression<'a>) -> Result<(), LoadError> {
        self.warn_if_declares(call.span, "call", |finder| {
            for argument in &call.arguments {
                finder.visit_argument(argument);
            }
        });
        Ok(())
    }

    /// `this.timeout(n)`, `this.slow(n)`, `this.retries(n)`.
    fn configure(&self, setter: &str, call: &'a CallExpression<'a>, scope: &mut Suite<'_>) {
        let amount = call
            .arguments
            .first()
            .and_then(Argument::as_expression)
            .and_then(|expr| self.value_of(expr))
            .and_then(|value| match value {
                Value::Num(n) if n >= 0.0 => Some(n as u64),
                Value::Str(s) => s.parse().ok(),
                _ => None,
            })
            .unwrap_or_default();

        match setter {
            "timeout" => {
                scope.timeout(amount);
            }
            "slow" => {
                scope.slow(amount);
            }
            "retries" => {
                scope.retries(u32::try_from(amount).unwrap_or(u32::MAX));
            }
            _ => {}
        }
    }

    /// `[...].forEach(callback)`: one activation per element with
    /// `(element, index)`.
    fn eval_for_each(
        &mut self,
        call: &'a CallExpression<'a>,
        items: Vec<Binding<'a>>,
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        let Some(closure) = self.closure_argument(call, 0) else {
            return self.skip_call(call);
        };
        for (index, item) in items.into_iter().enumerate() {
            let args = [item, Binding::Value(Value::Num(index as f64))];
            self.invoke(closure, &args, call.span, scope)?;
        }
        Ok(())
    }

    fn eval_for_of(&mut self, stmt: &'a ForOfStatement<'a>, scope: &mut Suite<'_>) -> Result<(), LoadError> {
        let Some(items) = self.elements_of(&stmt.right) else {
            self.warn_if_declares(stmt.span, "for...of loop", |finder| finder.visit_statement(&stmt.body));
            return Ok(());
        };

        for item in items {
            let outer = self.enter_scope(self.current, false);
            match &stmt.left {
                ForStatementLeft::VariableDeclaration(decl) => {
                    let var = matches!(decl.kind, VariableDeclarationKind::Var);
                    for declarator in &decl.declarations {
                        if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
                            self.declare(ident.name.as_str(), item.clone(), var);
                        }
                    }
                }
                ForStatementLeft::AssignmentTargetIdentifier(ident) => {
                    self.assign(ident.name.as_str(), item);
                }
                _ => {}
            }
            let result = self.eval_statement(&stmt.body, scope);
            self.current = outer;
            result?;
        }
        Ok(())
    }

    fn eval_suite_callback(
        &mut self,
        closure: Closure<'a>,
        frame: Frame,
        span: Span,
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        self.activations.push(frame);
        let result = self.invoke(closure, &[], span, scope);
        self.activations.pop();
        result
    }

    /// Run `closure` in a fresh function scope under the scope it was created
    /// in. `span` is the calling expression.
    fn invoke(
        &mut self,
        closure: Closure<'a>,
        args: &[Binding<'a>],
        span: Span,
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(LoadError::Thrown {
                location: self.location(span),
                message: "Maximum call stack size exceeded".to_string(),
            });
        }

        let caller = self.enter_scope(closure.env, true);
        self.depth += 1;

        for (index, param) in closure.callback.params().items.iter().enumerate() {
            if let BindingPatternKind::BindingIdentifier(ident) = &param.pattern.kind {
                let arg = args.get(index).cloned().unwrap_or(Binding::Opaque);
                self.bind(ident.name.as_str(), arg);
            }
        }

        let result = match closure.callback {
            Callback::Function(function) => match &function.body {
                Some(body) => self.eval_statements(&body.statements, scope),
                None => Ok(()),
            },
            Callback::Arrow(arrow) if arrow.expression => match arrow.body.statements.first() {
                Some(Statement::ExpressionStatement(stmt)) => self.eval_expression(&stmt.expression, scope),
                _ => Ok(()),
            },
            Callback::Arrow(arrow) => self.eval_statements(&arrow.body.statements, scope),
        };

        self.depth -= 1;
        self.current = caller;
        result
    }

    fn declare_variables(
        &mut self,
        decl: &'a VariableDeclaration<'a>,
        scope: &mut Suite<'_>,
    ) -> Result<(), LoadError> {
        let var = matches!(decl.kind, VariableDeclarationKind::Var);
        for declarator in &decl.declarations {
            let binding = match &declarator.init {
                Some(init) => {
                    self.eval_expression(init, scope)?;
                    self.binding_of(init)
                }
                None => Binding::Opaque,
            };
            if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
                self.declare(ident.name.as_str(), binding, var);
            }
        }
        Ok(())
    }

    /// Open a scope under `parent` and make it current; returns the scope
    /// to restore afterwards.
    fn enter_scope(&mut self, parent: usize, function: bool) -> usize {
        self.scopes.push(Scope::new(Some(parent), function));
        std::mem::replace(&mut self.current, self.scopes.len() - 1)
    }

    /// Scopes from `start` outwards.
    fn chain(&self, start: usize) -> impl Iterator<Item = (usize, &Scope<'a>)> {
        std::iter::successors(Some(start), move |&index| {
            self.scopes.get(index).and_then(|scope| scope.parent)
        })
        .filter_map(move |index| self.scopes.get(index).map(|scope| (index, scope)))
    }

    fn bind(&mut self, name: &'a str, binding: Binding<'a>) {
        self.bind_in(self.current, name, binding);
    }

    fn bind_in(&mut self, index: usize, name: &'a str, binding: Binding<'a>) {
        if let Some(scope) = self.scopes.get_mut(index) {
            scope.bindings.insert(name, binding);
        }
    }

    /// `var` lands in the nearest function scope, `let`/`const` in the
    /// current one.
    fn declare(&mut self, name: &'a str, binding: Binding<'a>, var: bool) {
        let target = if var {
            self.chain(self.current)
                .find(|(_, scope)| scope.function)
                .map_or(0, |(index, _)| index)
        } else {
            self.current
        };
        self.bind_in(target, name, binding);
    }

    /// Assignment updates the nearest existing binding, or creates a global.
    fn assign(&mut self, name: &'a str, binding: Binding<'a>) {
        let target = self
            .chain(self.current)
            .find(|(_, scope)| scope.bindings.contains_key(name))
            .map_or(0, |(index, _)| index);
        self.bind_in(target, name, binding);
    }

    fn lookup(&self, name: &str) -> Option<Binding<'a>> {
        self.chain(self.current)
            .find_map(|(_, scope)| scope.bindings.get(name).cloned())
    }

    /// What a binding initialised with `expr` holds.
    fn binding_of(&self, expr: &'a Expression<'a>) -> Binding<'a> {
        if let Some(closure) = self.closure_of(expr) {
            return Binding::Callback(closure);
        }
        match expr {
            Expression::ArrayExpression(array) => Binding::Array(
                array
                    .elements
                    .iter()
                    .map(|element| element.as_expression().map_or(Binding::Opaque, |expr| self.binding_of(expr)))
                    .collect(),
            ),
            Expression::ParenthesizedExpression(expr) => self.binding_of(&expr.expression),
            Expression::Identifier(ident) => self.lookup(ident.name.as_str()).unwrap_or(Binding::Opaque),
            _ => self.value_of(expr).map_or(Binding::Opaque, Binding::Value),
        }
    }

    fn elements_of(&self, expr: &'a Expression<'a>) -> Option<Vec<Binding<'a>>> {
        match self.binding_of(expr) {
            Binding::Array(items) => Some(items),
            _ => None,
        }
    }

    fn argument_bindings(&self, call: &'a CallExpression<'a>) -> Vec<Binding<'a>> {
        call.arguments
            .iter()
            .map(|arg| arg.as_expression().map_or(Binding::Opaque, |expr| self.binding_of(expr)))
            .collect()
    }

    /// First argument as a declaration name.
    fn name_argument(&self, call: &'a CallExpression<'a>) -> String {
        let Some(expr) = call.arguments.first().and_then(Argument::as_expression) else {
            return String::new();
        };
        match self.value_of(expr) {
            Some(value) => value.into_string(),
            None => {
                let text = self.text(expr.span());
                warn!(
                    file = %self.source.path.display(),
                    line = self.lines.line(expr.span().start, self.source.text),
                    expression = text,
                    "declaration name is not statically known, using its source text"
                );
                text.to_string()
            }
        }
    }

    fn closure_argument(&self, call: &'a CallExpression<'a>, index: usize) -> Option<Closure<'a>> {
        call.arguments
            .get(index)
            .and_then(Argument::as_expression)
            .and_then(|expr| self.closure_of(expr))
    }

    fn closure_of(&self, expr: &'a Expression<'a>) -> Option<Closure<'a>> {
        let callback = match expr {
            Expression::FunctionExpression(function) => Callback::Function(function),
            Expression::ArrowFunctionExpression(arrow) => Callback::Arrow(arrow),
            Expression::ParenthesizedExpression(expr) => return self.closure_of(&expr.expression),
            Expression::Identifier(ident) => {
                return match self.lookup(ident.name.as_str()) {
                    Some(Binding::Callback(closure)) => Some(closure),
                    _ => None,
                };
            }
            _ => return None,
        };
        Some(Closure {
            callback,
            env: self.current,
        })
    }

    fn value_of(&self, expr: &'a Expression<'a>) -> Option<Value> {
        match expr {
            Expression::StringLiteral(lit) => Some(Value::Str(lit.value.to_string())),
            Expression::NumericLiteral(lit) => Some(Value::Num(lit.value)),
            Expression::BooleanLiteral(lit) => Some(Value::Bool(lit.value)),
            Expression::TemplateLiteral(template) => {
                let mut out = String::new();
                for (index, quasi) in template.quasis.iter().enumerate() {
                    let cooked = quasi.value.cooked.as_ref().unwrap_or(&quasi.value.raw);
                    out.push_str(cooked.as_str());
                    if let Some(expr) = template.expressions.get(index) {
                        out.push_str(&self.value_of(expr)?.into_string());
                    }
                }
                Some(Value::Str(out))
            }
            Expression::BinaryExpression(binary) if binary.operator == BinaryOperator::Addition => {
                let left = self.value_of(&binary.left)?;
                let right = self.value_of(&binary.right)?;
                match (left, right) {
                    (Value::Num(a), Value::Num(b)) => Some(Value::Num(a + b)),
                    (left, right) => Some(Value::Str(left.into_string() + &right.into_string())),
                }
            }
            Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::UnaryNegation => {
                match self.value_of(&unary.argument)? {
                    Value::Num(n) => Some(Value::Num(-n)),
                    _ => None,
                }
            }
            Expression::ParenthesizedExpression(expr) => self.value_of(&expr.expression),
            Expression::Identifier(ident) => match self.lookup(ident.name.as_str()) {
                Some(Binding::Value(value)) => Some(value),
                _ => None,
            },
            _ => None,
        }
    }

    fn thrown_message(&self, expr: &'a Expression<'a>) -> String {
        // `throw new Error('...')` reports its message like the engine would.
        if let Expression::NewExpression(new) = expr {
            let message = new
                .arguments
                .first()
                .and_then(Argument::as_expression)
                .and_then(|arg| self.value_of(arg));
            if let Some(message) = message {
                return message.into_string();
            }
        }
        match self.value_of(expr) {
            Some(value) => value.into_string(),
            None => self.text(expr.span()).to_string(),
        }
    }

    /// Warn when code that is not evaluated contains DSL calls, so a partial
    /// inventory never goes unnoticed.
    fn warn_if_declares(&self, span: Span, construct: &str, visit: impl FnOnce(&mut DeclarationFinder)) {
        if declares_anything(self.interface, visit) {
            warn!(
                file = %self.source.path.display(),
                line = self.lines.line(span.start, self.source.text),
                construct,
                "declarations inside this {construct} are not evaluated and are missing from the inventory"
            );
        }
    }

    /// Innermost frame first, then the suite callbacks that enclose it.
    fn call_site(&self, span: Span) -> CallSite {
        let mut frames = Vec::with_capacity(self.activations.len() + 1);
        frames.push(self.frame(span));
        frames.extend(self.activations.iter().rev().cloned());
        CallSite::Frames(frames)
    }

    fn frame(&self, span: Span) -> Frame {
        let (line, column) = self.lines.line_column(span.start, self.source.text);
        Frame::new(None, self.source.frame_file.clone(), line, column)
    }

    fn location(&self, span: Span) -> SourceLocation {
        self.resolver.resolve(&CallSite::Frames(vec![self.frame(span)]))
    }

    fn text(&self, span: Span) -> &'e str {
        self.source
            .text
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }
}

/// Looks for any call to a DSL entry point below the visited node.
struct DeclarationFinder {
    interface: Interface,
    found: bool,
}

impl<'a> Visit<'a> for DeclarationFinder {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.found {
            return;
        }
        let callee = match &call.callee {
            Expression::Identifier(ident) => Some((ident.name.as_str(), None)),
            Expression::StaticMemberExpression(member) => match &member.object {
                Expression::Identifier(ident) => Some((ident.name.as_str(), Some(member.property.name.as_str()))),
                _ => None,
            },
            _ => None,
        };
        if let Some((callee, modifier)) = callee {
            if self.interface.classify(callee, modifier).is_some() {
                self.found = true;
                return;
            }
        }
        walk::walk_call_expression(self, call);
    }
}

fn declares_anything(interface: Interface, visit: impl FnOnce(&mut DeclarationFinder)) -> bool {
    let mut finder = DeclarationFinder { interface, found: false };
    visit(&mut finder);
    finder.found
}

fn opaque_body() -> testmap_core::TestBody<'static> {
    Box::new(|| {})
}
