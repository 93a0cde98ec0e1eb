use std::{fmt::Write, ops::Deref};

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    /// Writes every item separated by a bare comma.
    pub(crate) fn write_list<'i, T, I>(&mut self, items: I) -> std::fmt::Result
    where
        T: FormatWriter + 'i,
        I: IntoIterator<Item = &'i T>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.writer.write_char(',')?;
            }
            item.format_writer(self)?;
        }
        Ok(())
    }
}

impl<D> FormatWriter for D
where
    D: Deref,
    D::Target: FormatWriter,
{
    fn format_writer<W: std::fmt::Write>(
        &self,
        ctx: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        self.deref().format_writer(ctx)
    }
}

pub(crate) fn to_string<T: FormatWriter>(value: &T, size_hint: usize) -> String {
    let mut str = String::with_capacity(size_hint);
    let mut context = FormatContext::new(&mut str);
    value
        .format_writer(&mut context)
        .expect("should not fail on a string writer");
    str
}
