//! Programmatic construction of syntax trees.
//!
//! `TreeBuilder` produces the same arena layout a parser would, handing out a
//! fresh, strictly increasing span for every node so node positions stay
//! unique within the file. Children are built first and passed to their
//! parent by id.
//!
//! ```
//! use go125_syntax::build::TreeBuilder;
//!
//! let mut b = TreeBuilder::new("geo");
//! let int = b.named("int");
//! let xy = b.field(&["X", "Y"], int);
//! let point = b.struct_type(vec![xy]);
//! b.type_decl("Point", point);
//! let tree = b.finish();
//! assert_eq!(tree.package_name(), "geo");
//! ```

use crate::ast::*;
use crate::tree::SyntaxTree;

#[derive(Debug)]
pub struct TreeBuilder {
    arena: AstArena,
    interner: Interner,
    cursor: u32,
    package_pos: Span,
    package: IdentName,
    doc: Option<CommentGroupId>,
    decls: Vec<TopLevelDecl>,
}

impl TreeBuilder {
    pub fn new(package: &str) -> Self {
        let mut b = Self {
            arena: AstArena::new(),
            interner: Interner::new(),
            cursor: 0,
            package_pos: Span::default(),
            package: IdentName {
                sym: Symbol::from_raw(0),
                pos: Span::default(),
            },
            doc: None,
            decls: Vec::new(),
        };
        b.package_pos = b.span();
        b.package = b.ident(package);
        b
    }

    /// Next unused one-byte span.
    fn span(&mut self) -> Span {
        let start = self.cursor;
        self.cursor += 2;
        Span {
            start,
            end: start + 1,
        }
    }

    pub fn finish(self) -> SyntaxTree {
        let mut arena = self.arena;
        let decls = arena.list_top_decls(self.decls);
        SyntaxTree {
            arena,
            interner: self.interner,
            root: SourceFile {
                package_pos: self.package_pos,
                name: self.package,
                decls,
                doc: self.doc,
            },
        }
    }

    pub fn ident(&mut self, name: &str) -> IdentName {
        IdentName {
            sym: self.interner.intern(name),
            pos: self.span(),
        }
    }

    fn idents(&mut self, names: &[&str]) -> ListRef<IdentName> {
        let names: Vec<_> = names.iter().map(|n| self.ident(n)).collect();
        self.arena.list_ident_names(names)
    }

    // Comments

    /// Line-comment group, one `// line` per entry.
    pub fn doc(&mut self, lines: &[&str]) -> CommentGroupId {
        let ids: Vec<_> = lines
            .iter()
            .map(|line| {
                let text = self.interner.intern(&format!("// {line}"));
                let span = self.span();
                self.arena.comments.alloc(
                    Comment {
                        kind: CommentKind::Line,
                        text,
                    },
                    span,
                )
            })
            .collect();
        let comments = self.arena.list_comment_ids(ids);
        let span = self.span();
        self.arena
            .comment_groups
            .alloc(CommentGroup { comments }, span)
    }

    pub fn file_doc(&mut self, lines: &[&str]) {
        self.doc = Some(self.doc(lines));
    }

    // Types

    fn alloc_type(&mut self, ty: Type) -> TypeId {
        let span = self.span();
        self.arena.types.alloc(ty, span)
    }

    pub fn named(&mut self, name: &str) -> TypeId {
        let name = self.ident(name);
        self.alloc_type(Type::Named {
            pkg: None,
            name,
            args: ListRef::EMPTY,
        })
    }

    pub fn qualified(&mut self, pkg: &str, name: &str) -> TypeId {
        let pkg = self.ident(pkg);
        let name = self.ident(name);
        self.alloc_type(Type::Named {
            pkg: Some(pkg),
            name,
            args: ListRef::EMPTY,
        })
    }

    /// `Name[Args]`
    pub fn instantiated(&mut self, name: &str, args: Vec<TypeId>) -> TypeId {
        let name = self.ident(name);
        let args = self.arena.list_types(args);
        self.alloc_type(Type::Named {
            pkg: None,
            name,
            args,
        })
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        let star_pos = self.span();
        self.alloc_type(Type::Pointer { star_pos, elem })
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Slice { elem })
    }

    /// `[len]elem` with an integer literal length.
    pub fn array(&mut self, len: &str, elem: TypeId) -> TypeId {
        let len = self.int_lit(len);
        self.array_expr(len, elem)
    }

    /// `[len]elem` with an arbitrary length expression.
    pub fn array_expr(&mut self, len: ExprId, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Array {
            len: ArrayLen::Expr(len),
            elem,
        })
    }

    pub fn map(&mut self, key: TypeId, val: TypeId) -> TypeId {
        self.alloc_type(Type::Map { key, val })
    }

    pub fn chan(&mut self, dir: ChanDir, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Chan { dir, elem })
    }

    pub fn struct_type(&mut self, fields: Vec<FieldId>) -> TypeId {
        let fields = self.field_list(fields);
        self.alloc_type(Type::Struct { fields })
    }

    pub fn interface_type(&mut self, elems: Vec<InterfaceElem>) -> TypeId {
        let l_brace = self.span();
        let elems = self.arena.list_interface_elems(elems);
        let r_brace = self.span();
        self.alloc_type(Type::Interface {
            l_brace,
            elems,
            r_brace,
        })
    }

    pub fn func_type(&mut self, sig: SignatureId) -> TypeId {
        self.alloc_type(Type::Func { sig })
    }

    pub fn paren_type(&mut self, typ: TypeId) -> TypeId {
        self.alloc_type(Type::Paren { typ })
    }

    /// Error-recovery placeholder, as a parser emits for unparsable types.
    pub fn bad_type(&mut self) -> TypeId {
        let span = self.span();
        self.alloc_type(Type::Bad(span))
    }

    pub fn method_elem(&mut self, name: &str, sig: SignatureId) -> InterfaceElem {
        InterfaceElem::Method {
            doc: None,
            name: self.ident(name),
            sig,
        }
    }

    // Fields and signatures

    fn alloc_field(&mut self, field: Field) -> FieldId {
        let span = self.span();
        self.arena.fields.alloc(field, span)
    }

    fn field_list(&mut self, fields: Vec<FieldId>) -> FieldList {
        let open = self.span();
        let fields = self.arena.list_fields(fields);
        let close = self.span();
        FieldList {
            open,
            fields,
            close,
        }
    }

    /// Field group `names typ`.
    pub fn field(&mut self, names: &[&str], typ: TypeId) -> FieldId {
        let names = self.idents(names);
        self.alloc_field(Field {
            names,
            ellipsis_pos: None,
            typ,
            tag: None,
            doc: None,
            comment: None,
        })
    }

    /// Struct field group with a tag; `tag` includes its backquotes.
    pub fn tagged_field(&mut self, names: &[&str], typ: TypeId, tag: &str) -> FieldId {
        let id = self.field(names, typ);
        let tag = self.string_lit(tag);
        self.arena.fields[id].tag = Some(tag);
        id
    }

    /// Attaches a doc comment to a field group.
    pub fn field_doc(&mut self, id: FieldId, lines: &[&str]) -> FieldId {
        let doc = self.doc(lines);
        self.arena.fields[id].doc = Some(doc);
        id
    }

    /// Embedded struct field or unnamed parameter.
    pub fn param(&mut self, typ: TypeId) -> FieldId {
        self.field(&[], typ)
    }

    pub fn variadic(&mut self, names: &[&str], typ: TypeId) -> FieldId {
        let id = self.field(names, typ);
        let ellipsis = self.span();
        self.arena.fields[id].ellipsis_pos = Some(ellipsis);
        id
    }

    pub fn signature(&mut self, params: Vec<FieldId>, results: Vec<FieldId>) -> SignatureId {
        let params = self.field_list(params);
        let results = if results.is_empty() {
            None
        } else {
            Some(Results::Params(self.field_list(results)))
        };
        let span = self.span();
        self.arena.signatures.alloc(Signature { params, results }, span)
    }

    // Declarations

    /// Appends a `GenDecl` to the file and returns its id.
    pub fn gen_decl(
        &mut self,
        kind: GenDeclKind,
        doc: Option<CommentGroupId>,
        specs: Vec<Spec>,
    ) -> DeclId {
        let id = self.local_gen_decl(kind, doc, specs);
        self.decls.push(TopLevelDecl::Decl(id));
        id
    }

    /// Builds a `GenDecl` without attaching it to the file, for use inside
    /// function bodies.
    pub fn local_gen_decl(
        &mut self,
        kind: GenDeclKind,
        doc: Option<CommentGroupId>,
        specs: Vec<Spec>,
    ) -> DeclId {
        let kw_pos = self.span();
        let grouped = specs.len() != 1;
        let l_paren = grouped.then(|| self.span());
        let specs = self.arena.list_specs(specs);
        let r_paren = grouped.then(|| self.span());
        let span = self.span();
        self.arena.decls.alloc(
            Decl::Gen(GenDecl {
                doc,
                kw_pos,
                kind,
                l_paren,
                specs,
                r_paren,
            }),
            span,
        )
    }

    pub fn bad_decl(&mut self) -> DeclId {
        let span = self.span();
        let id = self.arena.decls.alloc(Decl::Bad(span), span);
        self.decls.push(TopLevelDecl::Decl(id));
        id
    }

    /// `type name typ` as a spec, for grouped declarations.
    pub fn type_spec(&mut self, name: &str, typ: TypeId) -> Spec {
        Spec::Type(TypeSpec {
            doc: None,
            name: self.ident(name),
            assign_pos: None,
            typ,
        })
    }

    /// `type name = typ` as a spec.
    pub fn alias_spec(&mut self, name: &str, typ: TypeId) -> Spec {
        let name = self.ident(name);
        let assign = self.span();
        Spec::Type(TypeSpec {
            doc: None,
            name,
            assign_pos: Some(assign),
            typ,
        })
    }

    /// Gives a type or value spec its own doc comment.
    pub fn with_doc(&mut self, spec: Spec, lines: &[&str]) -> Spec {
        let doc = Some(self.doc(lines));
        match spec {
            Spec::Type(ts) => Spec::Type(TypeSpec { doc, ..ts }),
            Spec::Value(vs) => Spec::Value(ValueSpec { doc, ..vs }),
            Spec::Import(is) => Spec::Import(ImportSpec { doc, ..is }),
        }
    }

    pub fn type_decl(&mut self, name: &str, typ: TypeId) -> DeclId {
        let spec = self.type_spec(name, typ);
        self.gen_decl(GenDeclKind::Type, None, vec![spec])
    }

    pub fn alias_decl(&mut self, name: &str, typ: TypeId) -> DeclId {
        let spec = self.alias_spec(name, typ);
        self.gen_decl(GenDeclKind::Type, None, vec![spec])
    }

    pub fn value_spec(&mut self, names: &[&str], typ: Option<TypeId>, values: Vec<ExprId>) -> Spec {
        let names = self.idents(names);
        let values = self.arena.list_exprs(values);
        Spec::Value(ValueSpec {
            doc: None,
            names,
            typ,
            values,
        })
    }

    pub fn var_decl(&mut self, names: &[&str], typ: Option<TypeId>, values: Vec<ExprId>) -> DeclId {
        let spec = self.value_spec(names, typ, values);
        self.gen_decl(GenDeclKind::Var, None, vec![spec])
    }

    /// `import "path"`
    pub fn import(&mut self, path: &str) -> DeclId {
        self.import_spec(None, path)
    }

    /// `import name "path"`
    pub fn import_named(&mut self, name: &str, path: &str) -> DeclId {
        let name = ImportName::Name(self.ident(name));
        self.import_spec(Some(name), path)
    }

    /// `import . "path"`
    pub fn import_dot(&mut self, path: &str) -> DeclId {
        let dot = ImportName::Dot(self.span());
        self.import_spec(Some(dot), path)
    }

    /// `import _ "path"`
    pub fn import_blank(&mut self, path: &str) -> DeclId {
        let blank = ImportName::Blank(self.span());
        self.import_spec(Some(blank), path)
    }

    fn import_spec(&mut self, name: Option<ImportName>, path: &str) -> DeclId {
        let path = self.string_lit(&format!("\"{path}\""));
        let spec = Spec::Import(ImportSpec {
            doc: None,
            name,
            path,
        });
        self.gen_decl(GenDeclKind::Import, None, vec![spec])
    }

    /// Top-level function or method. `recv` is the receiver field group.
    pub fn func_decl(
        &mut self,
        doc: Option<CommentGroupId>,
        recv: Option<FieldId>,
        name: &str,
        signature: SignatureId,
        body: Option<Vec<StmtId>>,
    ) -> FuncDeclId {
        let func_pos = self.span();
        let recv = recv.map(|r| self.field_list(vec![r]));
        let name = self.ident(name);
        let body = body.map(|stmts| self.block(stmts));
        let span = self.span();
        let id = self.arena.funcs.alloc(
            FuncDecl {
                doc,
                func_pos,
                recv,
                name,
                signature,
                body,
            },
            Span {
                start: func_pos.start,
                end: span.end,
            },
        );
        self.decls.push(TopLevelDecl::Func(id));
        id
    }

    pub fn func(&mut self, name: &str, signature: SignatureId, body: Vec<StmtId>) -> FuncDeclId {
        self.func_decl(None, None, name, signature, Some(body))
    }

    /// Method whose receiver is `recv_name recv_type`.
    pub fn method(
        &mut self,
        recv_name: &str,
        recv_type: TypeId,
        name: &str,
        signature: SignatureId,
        body: Vec<StmtId>,
    ) -> FuncDeclId {
        let recv = self.field(&[recv_name], recv_type);
        self.func_decl(None, Some(recv), name, signature, Some(body))
    }

    // Statements

    fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let span = self.span();
        self.arena.stmts.alloc(stmt, span)
    }

    pub fn block(&mut self, stmts: Vec<StmtId>) -> Block {
        let l_brace = self.span();
        let stmts = self.arena.list_stmts(stmts);
        let r_brace = self.span();
        Block {
            l_brace,
            stmts,
            r_brace,
        }
    }

    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.alloc_stmt(Stmt::Expr(expr))
    }

    pub fn decl_stmt(&mut self, decl: DeclId) -> StmtId {
        self.alloc_stmt(Stmt::Decl(decl))
    }

    /// `names := values`
    pub fn define(&mut self, names: &[&str], values: Vec<ExprId>) -> StmtId {
        let names = self.idents(names);
        let op_pos = self.span();
        let values = self.arena.list_exprs(values);
        self.alloc_stmt(Stmt::Define {
            names,
            op_pos,
            values,
        })
    }

    pub fn ret(&mut self, results: Vec<ExprId>) -> StmtId {
        let return_pos = self.span();
        let results = self.arena.list_exprs(results);
        self.alloc_stmt(Stmt::Return {
            return_pos,
            results,
        })
    }

    pub fn if_stmt(&mut self, cond: ExprId, then: Vec<StmtId>) -> StmtId {
        let if_pos = self.span();
        let then_block = self.block(then);
        self.alloc_stmt(Stmt::If {
            if_pos,
            init: None,
            cond,
            then_block,
            else_stmt: None,
        })
    }

    // Expressions

    fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let span = self.span();
        self.arena.exprs.alloc(expr, span)
    }

    pub fn name_expr(&mut self, name: &str) -> ExprId {
        let name = self.ident(name);
        self.alloc_expr(Expr::Ident(name))
    }

    pub fn int_lit(&mut self, value: &str) -> ExprId {
        let value = self.interner.intern(value);
        self.alloc_expr(Expr::BasicLit(BasicLit {
            kind: BasicLitKind::Int,
            value,
        }))
    }

    fn string_lit(&mut self, raw: &str) -> StringLit {
        StringLit {
            value: self.interner.intern(raw),
            raw: self.span(),
        }
    }

    pub fn selector(&mut self, expr: ExprId, sel: &str) -> ExprId {
        let sel = self.ident(sel);
        self.alloc_expr(Expr::Selector { expr, sel })
    }

    pub fn call(&mut self, callee: ExprId, args: Vec<ExprId>) -> ExprId {
        let args = self.arena.list_exprs(args);
        self.alloc_expr(Expr::Call {
            callee,
            args,
            ellipsis: None,
        })
    }

    pub fn binary(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        let op_pos = self.span();
        self.alloc_expr(Expr::Binary {
            left,
            op,
            op_pos,
            right,
        })
    }

    pub fn func_lit(&mut self, sig: SignatureId, body: Vec<StmtId>) -> ExprId {
        let func_pos = self.span();
        let body = self.block(body);
        self.alloc_expr(Expr::FuncLit {
            func_pos,
            sig,
            body,
        })
    }

    /// `typ{field: value, ...}`
    pub fn composite(&mut self, typ: Option<TypeId>, elems: Vec<(Option<&str>, ExprId)>) -> ExprId {
        let elems: Vec<_> = elems
            .into_iter()
            .map(|(key, value)| KeyedElement {
                key: key.map(|k| Key::FieldName(self.ident(k))),
                value: Element::Expr(value),
            })
            .collect();
        let l_brace = self.span();
        let elements = self.arena.list_keyed_elems(elems);
        let r_brace = self.span();
        self.alloc_expr(Expr::CompositeLit {
            typ,
            lit: LiteralValue {
                l_brace,
                elements,
                r_brace,
            },
        })
    }

    pub fn unary(&mut self, op: UnaryOp, expr: ExprId) -> ExprId {
        let op_pos = self.span();
        self.alloc_expr(Expr::Unary { op, op_pos, expr })
    }
}
