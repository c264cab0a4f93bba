//! Whole-file scenarios composed from every writer operation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use phpw::{EmitError, FileSink, Literal, PhpWriter, Sink, StringSink, TypeKind, Visibility};
use pretty_assertions::assert_eq;

const KITCHEN_SINK: &str = "namespace FooBar;

use Cat as Dog;
class Foo extends Bar implements Baz
{
    use Bazzer;
    const RANDOM_NUMBER = 4;
    private $foo = 12;
    /**
     * Returns foo.
     */
    public function getFoo()
    {
        return $this->foo;
    }
}
";

fn kitchen_sink<S: Sink>(writer: &mut PhpWriter<S>) -> Result<(), EmitError> {
    writer
        .emit_namespace("FooBar")?
        .emit_import("Cat", Some("Dog"))?
        .begin_type("Foo", TypeKind::Class, Some("Bar"), &["Baz"])?
        .emit_use_trait("Bazzer")?
        .emit_constant("RANDOM_NUMBER", 4)?
        .emit_property("foo", Visibility::Private, false, Some(12.into()))?
        .emit_doc_comment(&["Returns foo."])?
        .begin_method("getFoo", Visibility::Public, &[], &[], false)?
        .emit_statement("return $this->foo")?
        .end_method()?
        .end_type()?;
    Ok(())
}

#[test]
fn kitchen_sink_in_memory() {
    let mut writer = PhpWriter::in_memory();
    kitchen_sink(&mut writer).unwrap();

    assert_eq!(writer.output(), KITCHEN_SINK);
    assert_eq!(writer.indent_level(), 0);
}

#[test]
fn kitchen_sink_to_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let sink = FileSink::truncate(file.path()).unwrap();

    let mut writer = PhpWriter::new(sink);
    kitchen_sink(&mut writer).unwrap();
    let mut sink = writer.finish().unwrap();
    sink.close().unwrap();

    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, KITCHEN_SINK);
}

#[test]
fn appending_two_units_to_one_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    for name in ["First", "Second"] {
        let mut writer = PhpWriter::new(FileSink::append(file.path()).unwrap());
        writer
            .begin_type(name, TypeKind::Interface, None, &[])
            .unwrap()
            .end_type()
            .unwrap();
        writer.into_sink().close().unwrap();
    }

    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "interface First\n{\n}\ninterface Second\n{\n}\n");
}

#[test]
fn service_class() {
    let mut writer = PhpWriter::new(StringSink::new());
    writer
        .emit_namespace(r"App\Service")
        .unwrap()
        .emit_import(r"Psr\Log\LoggerInterface", None)
        .unwrap()
        .emit_newline()
        .unwrap()
        .emit_final()
        .unwrap()
        .begin_type("Mailer", TypeKind::Class, None, &["MailerInterface"])
        .unwrap()
        .emit_use_traits(&["LoggerAware", "Retries"])
        .unwrap()
        .emit_property("instances", Visibility::Protected, true, Some(0.into()))
        .unwrap()
        .emit_property("from", Visibility::Private, false, Some("noreply@example.com".into()))
        .unwrap()
        .emit_doc_comment(&["Send a message.", "", "@return bool"])
        .unwrap()
        .begin_method(
            "send",
            Visibility::Public,
            &["to", "body"],
            &[("retries", 3.into()), ("ratio", 0.5.into()), ("cc", Literal::Null)],
            false,
        )
        .unwrap()
        .emit_statement("$this->log($to)")
        .unwrap()
        .emit_statement("return true")
        .unwrap()
        .end_method()
        .unwrap()
        .emit_abstract()
        .unwrap()
        .begin_method("transport", Visibility::Protected, &[], &[], true)
        .unwrap()
        .end_method()
        .unwrap()
        .end_type()
        .unwrap();

    let expected = r#"namespace App\Service;

use Psr\Log\LoggerInterface;

final class Mailer implements MailerInterface
{
    use LoggerAware, Retries;
    protected static $instances = 0;
    private $from = 'noreply@example.com';
    /**
     * Send a message.
     *
     * @return bool
     */
    public function send($to, $body, $retries = 3, $ratio = 0.5, $cc = NULL)
    {
        $this->log($to);
        return true;
    }
    abstract protected static function transport()
    {
    }
}
"#;
    assert_eq!(writer.output(), expected);
    writer.finish().unwrap();
}
